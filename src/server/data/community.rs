//! Community data repository for database operations.
//!
//! Communities are stored in the `community` table; the member set lives in
//! `community_member`, shared with the user side of the relationship.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::community::{Community, CreateCommunityParams, UpdateCommunityParams},
    util::object_id,
};

pub struct CommunityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new community with a freshly generated id and no members.
    ///
    /// # Returns
    /// - `Ok(Community)` - The created community
    /// - `Err(DbErr)` - Insert failed (including the unique name constraint)
    pub async fn create(&self, params: CreateCommunityParams) -> Result<Community, DbErr> {
        let entity = entity::prelude::Community::insert(entity::community::ActiveModel {
            id: ActiveValue::Set(object_id::generate()),
            name: ActiveValue::Set(params.name),
            subtitle: ActiveValue::Set(params.subtitle),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(params.icon),
            creator_id: ActiveValue::Set(params.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Community::from_entity(entity, Vec::new(), 0))
    }

    /// Finds a community by id with its members and post count.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Community>, DbErr> {
        let Some(entity) = entity::prelude::Community::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.load(entity).await.map(Some)
    }

    /// Gets all communities in creation order with members and post counts.
    pub async fn get_all(&self) -> Result<Vec<Community>, DbErr> {
        let entities = entity::prelude::Community::find()
            .order_by_asc(entity::community::Column::Id)
            .all(self.db)
            .await?;

        let mut communities = Vec::with_capacity(entities.len());
        for entity in entities {
            communities.push(self.load(entity).await?);
        }

        Ok(communities)
    }

    /// Checks whether a community with `id` exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Community::find()
            .filter(entity::community::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a name is used by any community other than `except_id`.
    pub async fn name_taken(&self, name: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Community::find()
            .filter(entity::community::Column::Name.eq(name));
        if let Some(id) = except_id {
            query = query.filter(entity::community::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces the editable fields of a community.
    ///
    /// # Returns
    /// - `Ok(Some(Community))` - The updated community
    /// - `Ok(None)` - No community with that id
    pub async fn update(&self, params: UpdateCommunityParams) -> Result<Option<Community>, DbErr> {
        let result = entity::prelude::Community::update_many()
            .col_expr(entity::community::Column::Name, Expr::value(params.name))
            .col_expr(entity::community::Column::Subtitle, Expr::value(params.subtitle))
            .col_expr(entity::community::Column::Description, Expr::value(params.description))
            .col_expr(entity::community::Column::Icon, Expr::value(params.icon))
            .filter(entity::community::Column::Id.eq(&params.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(&params.id).await
    }

    /// Deletes a community row. Posts and memberships are left in place.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Community::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a user to a community's member set.
    ///
    /// Adding an existing member is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - User was already a member
    pub async fn add_member(&self, community_id: &str, user_id: &str) -> Result<bool, DbErr> {
        let inserted = entity::prelude::CommunityMember::insert(
            entity::community_member::ActiveModel {
                community_id: ActiveValue::Set(community_id.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                joined_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::community_member::Column::CommunityId,
                entity::community_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a user from a community's member set.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User was not a member
    pub async fn remove_member(&self, community_id: &str, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CommunityMember::delete_many()
            .filter(entity::community_member::Column::CommunityId.eq(community_id))
            .filter(entity::community_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load(&self, entity: entity::community::Model) -> Result<Community, DbErr> {
        let members = entity::prelude::CommunityMember::find()
            .filter(entity::community_member::Column::CommunityId.eq(&entity.id))
            .order_by_asc(entity::community_member::Column::JoinedAt)
            .order_by_asc(entity::community_member::Column::UserId)
            .all(self.db)
            .await?;

        let post_count = entity::prelude::Post::find()
            .filter(entity::post::Column::CommunityId.eq(&entity.id))
            .count(self.db)
            .await?;

        Ok(Community::from_entity(entity, members, post_count))
    }
}
