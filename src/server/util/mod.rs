//! Small helpers shared by controllers and repositories.

pub mod json;
pub mod object_id;
