//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps domain-specific errors and implements `IntoResponse` so handlers can return it
//! directly.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorListDto, FieldErrorDto},
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors with their own
/// response mapping (`AuthError`, `ValidationError`) delegate to it; the generic variants
/// map to standard status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()`. Controllers usually replace it with a
    /// `Forbidden` carrying their own message via [`AppError::or_forbidden`].
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request with `{ errors: [...] }`.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected behavior inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The caller is not allowed to perform the operation.
    ///
    /// Results in 403 Forbidden with `{ errors: [{ msg }] }`.
    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    /// Replaces an authentication failure with a 403 carrying `message`.
    ///
    /// Other errors (database failures while resolving the token, etc.) pass through
    /// unchanged so they still surface as 500.
    pub fn or_forbidden(self, message: &str) -> Self {
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("Rejected request: {}", err);
                Self::Forbidden(message.to_string())
            }
            other => other,
        }
    }

    /// Whether the error is a database unique constraint violation.
    ///
    /// A concurrent request can claim a unique value between the uniqueness check and
    /// the write; the write then fails with this error.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::DbErr(err) => matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationErr`, and `AuthErr` for bad credentials
/// - 403 Forbidden - `Forbidden`, and other `AuthErr` variants
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - everything else, body `{ "error": "error" }`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Json(ErrorListDto {
                    errors: vec![FieldErrorDto { param: None, msg }],
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic `{ "error": "error" }` body so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "error".to_string(),
            }),
        )
            .into_response()
    }
}
