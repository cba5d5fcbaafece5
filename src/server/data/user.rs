//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records together with
//! their community memberships and vote records.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User, VoteDirection},
    util::object_id,
};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated id.
    ///
    /// New users have no memberships and no votes.
    ///
    /// # Arguments
    /// - `params` - Username, email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed (including unique constraint violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(object_id::generate()),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            permission: ActiveValue::Set(params.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity, Vec::new(), Vec::new())
    }

    /// Finds a user by id, including memberships and votes.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unreadable stored data
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.load(entity).await.map(Some)
    }

    /// Finds a user by exact username, used for log-in.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.load(entity).await.map(Some)
    }

    /// Checks whether a username is used by any user other than `except_id`.
    pub async fn username_taken(
        &self,
        username: &str,
        except_id: Option<&str>,
    ) -> Result<bool, AppError> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));
        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email is used by any user other than `except_id`.
    pub async fn email_taken(&self, email: &str, except_id: Option<&str>) -> Result<bool, AppError> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces a user's username and email.
    ///
    /// Password hash, role, memberships and votes are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Username, Expr::value(params.username))
            .col_expr(entity::user::Column::Email, Expr::value(params.email))
            .filter(entity::user::Column::Id.eq(&params.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(&params.id).await
    }

    /// Deletes a user row.
    ///
    /// Memberships, votes, and authored content are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records or clears the user's vote direction on a post.
    ///
    /// `Some(direction)` upserts the `post_vote` row; `None` removes it.
    pub async fn set_vote(
        &self,
        user_id: &str,
        post_id: &str,
        direction: Option<VoteDirection>,
    ) -> Result<(), AppError> {
        match direction {
            Some(direction) => {
                entity::prelude::PostVote::insert(entity::post_vote::ActiveModel {
                    user_id: ActiveValue::Set(user_id.to_string()),
                    post_id: ActiveValue::Set(post_id.to_string()),
                    direction: ActiveValue::Set(direction.as_str().to_string()),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::post_vote::Column::UserId,
                        entity::post_vote::Column::PostId,
                    ])
                    .update_column(entity::post_vote::Column::Direction)
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
            }
            None => {
                entity::prelude::PostVote::delete_many()
                    .filter(entity::post_vote::Column::UserId.eq(user_id))
                    .filter(entity::post_vote::Column::PostId.eq(post_id))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Loads the membership and vote rows belonging to a user row.
    async fn load(&self, entity: entity::user::Model) -> Result<User, AppError> {
        let memberships = entity::prelude::CommunityMember::find()
            .filter(entity::community_member::Column::UserId.eq(&entity.id))
            .order_by_asc(entity::community_member::Column::JoinedAt)
            .order_by_asc(entity::community_member::Column::CommunityId)
            .all(self.db)
            .await?;

        let votes = entity::prelude::PostVote::find()
            .filter(entity::post_vote::Column::UserId.eq(&entity.id))
            .all(self.db)
            .await?;

        User::from_entity(entity, memberships, votes)
    }

    /// Loads a user that was just written, failing loudly if it vanished.
    pub async fn get_after_write(&self, id: &str) -> Result<User, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite("User", id.to_string()).into())
    }
}
