use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub text: String,
    pub url: Option<String>,
    pub author: String,
    pub community: String,
    pub votes: i32,
    /// Top-level comment ids in creation order
    pub comments: Vec<String>,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreatePostDto {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Text is required"))]
    pub text: String,
    /// Id of the community to post in
    #[validate(custom(function = "not_blank", message = "Community is required"))]
    pub community: String,
    #[validate(url(message = "Url must be a valid URL"))]
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdatePostDto {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Text is required"))]
    pub text: String,
    #[validate(url(message = "Url must be a valid URL"))]
    pub url: Option<String>,
}
