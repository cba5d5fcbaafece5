//! HTTP handlers.
//!
//! Controllers extract and validate input, resolve the caller through `AuthGuard`,
//! call the matching service and convert the result into a DTO response.

pub mod comment;
pub mod community;
pub mod health;
pub mod post;
pub mod user;
