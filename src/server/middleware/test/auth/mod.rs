use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn tokens() -> TokenService {
    TokenService::new("test-secret", 1)
}
