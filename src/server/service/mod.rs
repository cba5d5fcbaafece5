//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness, existence and ownership checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Operations that act on behalf of a user take the authenticated `User` as a parameter.

pub mod auth;
pub mod comment;
pub mod community;
pub mod post;
pub mod user;
