//! Post factory for creating test post entities.

use crate::factory::helpers::{next_id, next_object_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: String,
    text: String,
    url: Option<String>,
    author_id: String,
    community_id: String,
    votes: i32,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {n}"`
    /// - text: `"Post body"`
    /// - url: `None`
    /// - votes: `0`
    pub fn new(
        db: &'a DatabaseConnection,
        author_id: impl Into<String>,
        community_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            id: next_object_id(),
            title: format!("Post {}", next_id()),
            text: "Post body".to_string(),
            url: None,
            author_id: author_id.into(),
            community_id: community_id.into(),
            votes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            text: ActiveValue::Set(self.text),
            url: ActiveValue::Set(self.url),
            author_id: ActiveValue::Set(self.author_id),
            community_id: ActiveValue::Set(self.community_id),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: &str,
    community_id: &str,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id, community_id).build().await
}
