//! 24-character hexadecimal record identifiers.
//!
//! Layout (12 bytes, big-endian): 4-byte unix timestamp in seconds, 5-byte random value
//! fixed for the lifetime of the process, 3-byte counter. Identifiers generated by one
//! process therefore sort in creation order.

use std::{
    fmt::Write,
    sync::{
        atomic::{AtomicU32, Ordering},
        LazyLock,
    },
};

use chrono::Utc;

use crate::server::error::AppError;

/// Length of an identifier in hex characters.
pub const OBJECT_ID_LEN: usize = 24;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);
static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generates a new identifier.
pub fn generate() -> String {
    let timestamp = Utc::now().timestamp() as u32;
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst) & 0x00ff_ffff;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
    bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
    bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

    bytes
        .iter()
        .fold(String::with_capacity(OBJECT_ID_LEN), |mut out, byte| {
            let _ = write!(out, "{:02x}", byte);
            out
        })
}

/// Whether `id` has the shape of an identifier.
pub fn is_valid(id: &str) -> bool {
    id.len() == OBJECT_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `id` when well-formed, otherwise the not-found error for `kind`.
///
/// Malformed identifiers can never match a record, so they get the same response as a
/// missing one.
///
/// # Arguments
/// - `id` - Identifier taken from the request path
/// - `kind` - Lowercase resource name used in the message (`post`, `comment`, ...)
///
/// # Returns
/// - `Ok(&str)` - The identifier, unchanged
/// - `Err(AppError::NotFound)` - `No <kind> with id <id> found`
pub fn require<'a>(id: &'a str, kind: &str) -> Result<&'a str, AppError> {
    if is_valid(id) {
        Ok(id)
    } else {
        Err(not_found(kind, id))
    }
}

/// Not-found error in the shared `No <kind> with id <id> found` format.
pub fn not_found(kind: &str, id: &str) -> AppError {
    AppError::NotFound(format!("No {} with id {} found", kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_valid_ids() {
        let id = generate();

        assert_eq!(id.len(), OBJECT_ID_LEN);
        assert!(is_valid(&id));
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn ids_sort_in_creation_order() {
        let ids: Vec<String> = (0..100).map(|_| generate()).collect();

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_valid("12345"));
        assert!(!is_valid("zzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_valid("0123456789abcdef012345678"));
        assert!(is_valid("0123456789abcdef01234567"));
    }

    #[test]
    fn require_maps_malformed_ids_to_not_found() {
        let err = require("12345", "comment").unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "No comment with id 12345 found"));
    }
}
