//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - Argon2id PHC string
/// - `Err(AppError::InternalErr)` - Hashing failed or the blocking task was cancelled
pub async fn hash(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hashed)
}

/// Checks a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string (such as an unusable placeholder)
/// never matches.
pub async fn verify(password: String, stored_hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&stored_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(InternalError::from)?;

    Ok(matches)
}
