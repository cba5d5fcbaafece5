//! Shared field rules used by the DTO `Validate` derives.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Letters, digits and underscores only. Applies to community names and usernames.
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("name pattern is valid"));

/// Rejects values that are empty after trimming whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Accepts `upVote`, `downVote`, or the empty string (clears a vote).
pub fn vote_direction(value: &str) -> Result<(), ValidationError> {
    match value {
        "upVote" | "downVote" | "" => Ok(()),
        _ => Err(ValidationError::new("vote_direction")),
    }
}
