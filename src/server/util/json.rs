use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::{validation::ValidationError, AppError};

/// JSON body extractor that runs the payload's `Validate` rules.
///
/// Unreadable bodies and rule violations are both rejected with 400 and the
/// `{ errors: [...] }` body, so handlers only ever see valid input.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            ValidationError::message(rejection.body_text())
        })?;

        value.validate().map_err(ValidationError::from)?;

        Ok(Self(value))
    }
}
