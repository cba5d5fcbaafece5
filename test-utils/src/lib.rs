//! Agora Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the forum
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert entities with sensible defaults, and fixtures
//! that build entity models without touching the database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert users, communities, posts and comments
//! - **fixture**: In-memory entity models
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_post_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, community, post) = factory::helpers::create_post_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
