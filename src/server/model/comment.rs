//! Comment domain models and parameters.
//!
//! `Comment` is a single record with its direct responses as ids. `CommentNode` is the
//! same record inside a resolved reply tree, where each response is either a nested
//! node or, past the depth limit, a bare id.

use chrono::{DateTime, Utc};

use crate::model::comment::{
    CommentDto, CommentNodeDto, CommentResponseDto, CreateCommentDto, UpdateCommentDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author_id: String,
    pub post_id: String,
    pub parent_id: Option<String>,
    pub votes: i32,
    /// Direct response ids in creation order.
    pub responses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author: self.author_id,
            post: self.post_id,
            parent: self.parent_id,
            votes: self.votes,
            responses: self.responses,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::comment::Model, responses: Vec<String>) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            author_id: entity.author_id,
            post_id: entity.post_id,
            parent_id: entity.parent_id,
            votes: entity.votes,
            responses,
            created_at: entity.created_at,
        }
    }
}

/// A comment inside a resolved reply tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub id: String,
    pub text: String,
    pub author_id: String,
    pub post_id: String,
    pub parent_id: Option<String>,
    pub votes: i32,
    pub responses: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommentResponse {
    Resolved(Box<CommentNode>),
    Unresolved(String),
}

impl CommentResponse {
    pub fn id(&self) -> &str {
        match self {
            Self::Resolved(node) => &node.id,
            Self::Unresolved(id) => id,
        }
    }
}

impl CommentNode {
    /// Builds a node from a row and its already-built responses.
    pub fn from_entity(entity: entity::comment::Model, responses: Vec<CommentResponse>) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            author_id: entity.author_id,
            post_id: entity.post_id,
            parent_id: entity.parent_id,
            votes: entity.votes,
            responses,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentNodeDto {
        CommentNodeDto {
            id: self.id,
            text: self.text,
            author: self.author_id,
            post: self.post_id,
            parent: self.parent_id,
            votes: self.votes,
            responses: self
                .responses
                .into_iter()
                .map(|response| match response {
                    CommentResponse::Resolved(node) => {
                        CommentResponseDto::Resolved(Box::new(node.into_dto()))
                    }
                    CommentResponse::Unresolved(id) => CommentResponseDto::Unresolved(id),
                })
                .collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: String,
    pub author_id: String,
    pub text: String,
    pub parent_id: Option<String>,
}

impl CreateCommentParams {
    pub fn from_dto(post_id: String, author_id: String, dto: CreateCommentDto) -> Self {
        Self {
            post_id,
            author_id,
            text: dto.text,
            parent_id: dto.parent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub post_id: String,
    pub id: String,
    pub text: String,
}

impl UpdateCommentParams {
    pub fn from_dto(post_id: String, id: String, dto: UpdateCommentDto) -> Self {
        Self {
            post_id,
            id,
            text: dto.text,
        }
    }
}
