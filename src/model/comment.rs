use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::not_blank;

/// A comment with its responses as identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub post: String,
    pub parent: Option<String>,
    pub votes: i32,
    pub responses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A comment with its responses resolved into nested comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentNodeDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub post: String,
    pub parent: Option<String>,
    pub votes: i32,
    #[schema(no_recursion)]
    pub responses: Vec<CommentResponseDto>,
    pub created_at: DateTime<Utc>,
}

/// A response inside a comment tree.
///
/// Responses past the configured depth limit stay as bare identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CommentResponseDto {
    Resolved(Box<CommentNodeDto>),
    Unresolved(String),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateCommentDto {
    #[validate(custom(function = "not_blank", message = "Comment text is required"))]
    pub text: String,
    /// Id of the comment being answered; omit for a top-level comment
    pub parent: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateCommentDto {
    #[validate(custom(function = "not_blank", message = "Comment text is required"))]
    pub text: String,
}
