use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored permission level is not one the application knows.
    #[error("Unknown permission '{value}' stored for user {user_id}")]
    UnknownPermission { user_id: String, value: String },

    /// A stored vote direction is not `upVote` or `downVote`.
    #[error("Unknown vote direction '{value}' stored for user {user_id} on post {post_id}")]
    UnknownVoteDirection {
        user_id: String,
        post_id: String,
        value: String,
    },

    /// Hashing or parsing a password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a token failed.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),

    /// A row that was just written could not be read back.
    #[error("{0} {1} not found after write")]
    MissingAfterWrite(&'static str, String),
}
