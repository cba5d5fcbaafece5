//! Community domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::community::{CommunityDto, CreateCommunityDto, UpdateCommunityDto};

/// Community with its member ids and post count.
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Option<String>,
    pub creator_id: String,
    /// Member user ids in subscription order.
    pub members: Vec<String>,
    pub post_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn into_dto(self) -> CommunityDto {
        CommunityDto {
            id: self.id,
            name: self.name,
            subtitle: self.subtitle,
            description: self.description,
            icon: self.icon,
            creator: self.creator_id,
            member_count: self.members.len(),
            members: self.members,
            post_count: self.post_count,
            created_at: self.created_at,
        }
    }

    /// Converts entity models to a community domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The community row
    /// - `members` - The community's `community_member` rows, in subscription order
    /// - `post_count` - Number of posts in the community
    pub fn from_entity(
        entity: entity::community::Model,
        members: Vec<entity::community_member::Model>,
        post_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            subtitle: entity.subtitle,
            description: entity.description,
            icon: entity.icon,
            creator_id: entity.creator_id,
            members: members.into_iter().map(|m| m.user_id).collect(),
            post_count,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommunityParams {
    pub creator_id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Option<String>,
}

impl CreateCommunityParams {
    pub fn from_dto(creator_id: String, dto: CreateCommunityDto) -> Self {
        Self {
            creator_id,
            name: dto.name,
            subtitle: dto.subtitle,
            description: dto.description,
            icon: dto.icon,
        }
    }
}

/// Replaces the editable fields of a community. Creator and members are untouched.
#[derive(Debug, Clone)]
pub struct UpdateCommunityParams {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Option<String>,
}

impl UpdateCommunityParams {
    pub fn from_dto(id: String, dto: UpdateCommunityDto) -> Self {
        Self {
            id,
            name: dto.name,
            subtitle: dto.subtitle,
            description: dto.description,
            icon: dto.icon,
        }
    }
}
