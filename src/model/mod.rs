//! Request and response DTOs exchanged over the HTTP API.
//!
//! Input DTOs derive `Validate` and carry the field rules and messages returned to
//! clients in `{ errors: [...] }` bodies. Output DTOs serialize with camelCase keys.

pub mod api;
pub mod comment;
pub mod community;
pub mod post;
pub mod user;
pub mod validation;
