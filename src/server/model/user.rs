//! User domain models and parameters.
//!
//! Users carry their permission level, community memberships and per-post vote
//! directions. Memberships and votes live in their own tables and are joined in by the
//! repository when a user is loaded.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::{
    model::user::{CastVoteDto, SignUpDto, UpdateUserDto, UserDto},
    server::error::{internal::InternalError, validation::ValidationError, AppError},
};

/// Permission level stored on a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Regular,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(Self::Regular),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Direction of a recorded vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "upVote",
            Self::Down => "downVote",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upVote" => Some(Self::Up),
            "downVote" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Forum user with memberships and vote record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
    /// Ids of subscribed communities in subscription order.
    pub communities: Vec<String>,
    /// Post id to recorded vote direction.
    pub votes: BTreeMap<String, VoteDirection>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            permission: self.role.as_str().to_string(),
            communities: self.communities,
            votes: self
                .votes
                .into_iter()
                .map(|(post_id, direction)| (post_id, direction.as_str().to_string()))
                .collect(),
            created_at: self.created_at,
        }
    }

    /// Converts entity models to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `memberships` - The user's `community_member` rows, in subscription order
    /// - `votes` - The user's `post_vote` rows
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr)` - Stored permission or vote direction is unknown
    pub fn from_entity(
        entity: entity::user::Model,
        memberships: Vec<entity::community_member::Model>,
        votes: Vec<entity::post_vote::Model>,
    ) -> Result<Self, AppError> {
        let role = Role::parse(&entity.permission).ok_or_else(|| {
            InternalError::UnknownPermission {
                user_id: entity.id.clone(),
                value: entity.permission.clone(),
            }
        })?;

        let votes = votes
            .into_iter()
            .map(|vote| match VoteDirection::parse(&vote.direction) {
                Some(direction) => Ok((vote.post_id, direction)),
                None => Err(InternalError::UnknownVoteDirection {
                    user_id: vote.user_id,
                    post_id: vote.post_id,
                    value: vote.direction,
                }),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            communities: memberships.into_iter().map(|m| m.community_id).collect(),
            votes,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for registering a user. The password is still in plain text here.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for changing a user's username and email.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: String, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username,
            email: dto.email,
        }
    }
}

/// Parameters for casting a vote on a post.
#[derive(Debug, Clone)]
pub struct CastVoteParams {
    pub user_id: String,
    pub post_id: String,
    /// `None` clears the recorded direction.
    pub direction: Option<VoteDirection>,
    /// Change applied to the post's tally, in `-2..=2`.
    pub increase: i32,
}

impl CastVoteParams {
    /// Builds vote parameters from a validated request body.
    ///
    /// An empty `vote` clears the recorded direction.
    pub fn from_dto(user_id: String, dto: CastVoteDto) -> Result<Self, ValidationError> {
        let direction = match dto.vote.as_str() {
            "" => None,
            value => Some(VoteDirection::parse(value).ok_or_else(|| {
                ValidationError::field("vote", "Vote must be upVote, downVote or empty")
            })?),
        };
        let increase = dto
            .increase
            .ok_or_else(|| ValidationError::field("increase", "Vote increase is required"))?;

        Ok(Self {
            user_id,
            post_id: dto.post,
            direction,
            increase,
        })
    }
}
