//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of pure logic such as building comment trees from rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let root = fixture::comment::entity_builder().id("a").build();
//! let reply = fixture::comment::entity_builder().id("b").parent("a").build();
//! ```

pub mod comment;

pub use comment::{entity as comment_entity, entity_builder as comment_entity_builder};
