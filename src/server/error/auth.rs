use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorListDto, FieldErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request.
    #[error("Request has no bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry or format checks.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but its user no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(String),

    /// The user is authenticated but lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Log-in with an unknown username or wrong password.
    #[error("Incorrect username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 400 Bad Request with "Incorrect username or password"
/// - everything else → 403 Forbidden with a generic message
///
/// Details are logged at debug level and kept out of the response body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, self.to_string()),
            err => {
                tracing::debug!("{}", err);
                (StatusCode::FORBIDDEN, "Forbidden".to_string())
            }
        };

        (
            status,
            Json(ErrorListDto {
                errors: vec![FieldErrorDto { param: None, msg }],
            }),
        )
            .into_response()
    }
}
