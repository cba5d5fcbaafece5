//! Post domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::post::{CreatePostDto, PostDto, UpdatePostDto};

/// Post with its top-level comment ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub text: String,
    pub url: Option<String>,
    pub author_id: String,
    pub community_id: String,
    pub votes: i32,
    /// Ids of comments without a parent, in creation order.
    pub comments: Vec<String>,
    /// All comments on the post, responses included.
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            text: self.text,
            url: self.url,
            author: self.author_id,
            community: self.community_id,
            votes: self.votes,
            comments: self.comments,
            comment_count: self.comment_count,
            created_at: self.created_at,
        }
    }

    /// Converts the post row plus its comment summary into a domain model.
    pub fn from_entity(entity: entity::post::Model, comments: Vec<String>, comment_count: u64) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            url: entity.url,
            author_id: entity.author_id,
            community_id: entity.community_id,
            votes: entity.votes,
            comments,
            comment_count,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: String,
    pub community_id: String,
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl CreatePostParams {
    pub fn from_dto(author_id: String, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            community_id: dto.community,
            title: dto.title,
            text: dto.text,
            url: dto.url,
        }
    }
}

/// Replaces title, text and url. Votes, author and community are preserved.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: String,
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl UpdatePostParams {
    pub fn from_dto(id: String, dto: UpdatePostDto) -> Self {
        Self {
            id,
            title: dto.title,
            text: dto.text,
            url: dto.url,
        }
    }
}
