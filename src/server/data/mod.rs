//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. No foreign keys
//! exist between tables, so deletes never cascade.

pub mod comment;
pub mod community;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
