use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{vote_direction, NAME_PATTERN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    /// `regular` or `admin`
    pub permission: String,
    /// Ids of the communities the user is subscribed to
    pub communities: Vec<String>,
    /// Post id to `upVote` / `downVote`
    pub votes: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelopeDto {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUpDto {
    #[validate(
        length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Username can only contain letters, numbers and underscores"
        )
    )]
    pub username: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,
}

/// Credentials are checked against the store rather than field rules, so a missing
/// field fails the same way as a wrong password.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LogInDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateUserDto {
    #[validate(
        length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Username can only contain letters, numbers and underscores"
        )
    )]
    pub username: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CastVoteDto {
    #[validate(length(min = 1, message = "Post id is required"))]
    pub post: String,
    /// `upVote`, `downVote`, or empty to clear
    #[validate(custom(
        function = "vote_direction",
        message = "Vote must be upVote, downVote or empty"
    ))]
    pub vote: String,
    #[validate(
        required(message = "Vote increase is required"),
        range(min = -2, max = 2, message = "Vote increase must be between -2 and 2")
    )]
    pub increase: Option<i32>,
}
