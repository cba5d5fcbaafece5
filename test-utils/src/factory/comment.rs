//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_object_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    text: String,
    author_id: String,
    post_id: String,
    parent_id: Option<String>,
    votes: i32,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new top-level CommentFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Comment"`
    /// - parent_id: `None`
    /// - votes: `0`
    pub fn new(
        db: &'a DatabaseConnection,
        author_id: impl Into<String>,
        post_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            id: next_object_id(),
            text: "Comment".to_string(),
            author_id: author_id.into(),
            post_id: post_id.into(),
            parent_id: None,
            votes: 0,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Makes the comment a response of `parent_id`.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(self.id),
            text: ActiveValue::Set(self.text),
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            parent_id: ActiveValue::Set(self.parent_id),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on a post.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: &str,
    post_id: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, author_id, post_id).build().await
}

/// Creates a response to `parent` on the parent's post.
pub async fn create_response(
    db: &DatabaseConnection,
    author_id: &str,
    parent: &entity::comment::Model,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, author_id, parent.post_id.clone())
        .parent(parent.id.clone())
        .build()
        .await
}
