//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the connection is a pool handle and
//! the token keys are small byte buffers.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,
    /// Levels of the reply tree resolved when listing a post's comments.
    pub comment_max_depth: usize,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, comment_max_depth: usize) -> Self {
        Self {
            db,
            tokens,
            comment_max_depth,
        }
    }
}
