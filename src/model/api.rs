use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single error message, used for not-found and internal errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// One failed check on a request field.
///
/// `param` names the offending JSON field when the failure is tied to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub msg: String,
}

/// List of field errors, used for validation and authorization failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorListDto {
    pub errors: Vec<FieldErrorDto>,
}

/// Confirmation message for operations without a resource body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
