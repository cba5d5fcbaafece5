use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorListDto, FieldErrorDto};

/// One or more request fields failed validation.
///
/// Built from `validator::ValidationErrors` for declarative rules, or directly for checks
/// that need the database (uniqueness, existence of referenced records).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed: {}", .0.iter().map(|e| e.msg.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ValidationError(pub Vec<FieldErrorDto>);

impl ValidationError {
    /// Single failure tied to a JSON field.
    pub fn field(param: &str, msg: impl Into<String>) -> Self {
        Self(vec![FieldErrorDto {
            param: Some(param.to_string()),
            msg: msg.into(),
        }])
    }

    /// Single failure not tied to a field, such as an unreadable body.
    pub fn message(msg: impl Into<String>) -> Self {
        Self(vec![FieldErrorDto {
            param: None,
            msg: msg.into(),
        }])
    }

    /// Messages in order, for assertions and logging.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.msg.as_str()).collect()
    }
}

/// Flattens validator output into `{ param, msg }` pairs.
///
/// Field names are converted to the camelCase keys clients send, and the result is
/// sorted by field so responses are stable.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = Vec::new();
        for (field, field_errors) in fields {
            let param = camel_case(&field);
            for err in field_errors {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", param));
                out.push(FieldErrorDto {
                    param: Some(param.clone()),
                    msg,
                });
            }
        }

        Self(out)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorListDto { errors: self.0 })).into_response()
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
