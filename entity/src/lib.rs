//! SeaORM entity definitions for the forum schema.
//!
//! References between tables are plain identifier columns without foreign key
//! constraints. Deleting a row never cascades to its dependents.

pub mod prelude;

pub mod comment;
pub mod community;
pub mod community_member;
pub mod post;
pub mod post_vote;
pub mod user;
