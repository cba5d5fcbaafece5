//! Community factory for creating test community entities.

use crate::factory::helpers::{next_id, next_object_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test communities with customizable fields.
pub struct CommunityFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    subtitle: String,
    description: String,
    icon: Option<String>,
    creator_id: String,
}

impl<'a> CommunityFactory<'a> {
    /// Creates a new CommunityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"community_{n}"`
    /// - subtitle: `"Subtitle"`
    /// - description: `"Description"`
    /// - icon: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - Id of the creating user
    pub fn new(db: &'a DatabaseConnection, creator_id: impl Into<String>) -> Self {
        Self {
            db,
            id: next_object_id(),
            name: format!("community_{}", next_id()),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
            icon: None,
            creator_id: creator_id.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    /// Builds and inserts the community entity into the database.
    pub async fn build(self) -> Result<entity::community::Model, DbErr> {
        entity::community::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            subtitle: ActiveValue::Set(self.subtitle),
            description: ActiveValue::Set(self.description),
            icon: ActiveValue::Set(self.icon),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a community with default values.
pub async fn create_community(
    db: &DatabaseConnection,
    creator_id: &str,
) -> Result<entity::community::Model, DbErr> {
    CommunityFactory::new(db, creator_id).build().await
}

/// Subscribes a user to a community.
pub async fn add_member(
    db: &DatabaseConnection,
    community_id: &str,
    user_id: &str,
) -> Result<entity::community_member::Model, DbErr> {
    entity::community_member::ActiveModel {
        community_id: ActiveValue::Set(community_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
