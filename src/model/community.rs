use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{not_blank, NAME_PATTERN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDto {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Option<String>,
    pub creator: String,
    pub members: Vec<String>,
    pub member_count: usize,
    pub post_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateCommunityDto {
    #[validate(
        length(min = 3, max = 21, message = "Community name must be between 3 and 21 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Community name can only contain letters, numbers and underscores"
        )
    )]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Subtitle is required"))]
    pub subtitle: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    #[validate(url(message = "Icon must be a valid URL"))]
    pub icon: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateCommunityDto {
    #[validate(
        length(min = 3, max = 21, message = "Community name must be between 3 and 21 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Community name can only contain letters, numbers and underscores"
        )
    )]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Subtitle is required"))]
    pub subtitle: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    #[validate(url(message = "Icon must be a valid URL"))]
    pub icon: Option<String>,
}
