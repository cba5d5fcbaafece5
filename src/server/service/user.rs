//! User profile management and vote casting.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    model::user::{CastVoteParams, UpdateUserParams, User},
    util::object_id,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with memberships and votes
    /// - `Err(AppError::NotFound)` - Malformed id or no such user
    pub async fn get(&self, id: &str) -> Result<User, AppError> {
        object_id::require(id, "user")?;

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| object_id::not_found("user", id))
    }

    /// Changes username and email, keeping them unique across other users.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        object_id::require(&params.id, "user")?;
        let repo = UserRepository::new(self.db);
        ensure_unique(&repo, &params.username, &params.email, Some(&params.id)).await?;

        let id = params.id.clone();
        let (username, email) = (params.username.clone(), params.email.clone());
        match repo.update(params).await {
            Err(err) if err.is_unique_violation() => {
                ensure_unique(&repo, &username, &email, Some(&id)).await?;
                Err(err)
            }
            result => result?.ok_or_else(|| object_id::not_found("user", &id)),
        }
    }

    /// Deletes a user. Their posts, comments and memberships stay in place.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        object_id::require(id, "user")?;

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(object_id::not_found("user", id));
        }

        tracing::info!("User {} deleted", id);

        Ok(())
    }

    /// Applies a vote to a post's tally and records the direction for the user.
    ///
    /// The tally update and the vote record are separate writes; if the second fails
    /// the tally keeps its new value.
    ///
    /// # Returns
    /// - `Ok(User)` - The voting user with the updated vote map
    /// - `Err(AppError::ValidationErr)` - `Post doesn't exist`
    pub async fn cast_vote(&self, params: CastVoteParams) -> Result<User, AppError> {
        let updated = PostRepository::new(self.db)
            .add_votes(&params.post_id, params.increase)
            .await?;
        if !updated {
            return Err(ValidationError::field("post", "Post doesn't exist").into());
        }

        let repo = UserRepository::new(self.db);
        repo.set_vote(&params.user_id, &params.post_id, params.direction)
            .await?;

        repo.get_after_write(&params.user_id).await
    }
}

/// Fails with `Username already exists` and/or `Email already exists` when another
/// user holds either value.
pub(super) async fn ensure_unique(
    repo: &UserRepository<'_>,
    username: &str,
    email: &str,
    except_id: Option<&str>,
) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if repo.username_taken(username, except_id).await? {
        errors.extend(ValidationError::field("username", "Username already exists").0);
    }
    if repo.email_taken(email, except_id).await? {
        errors.extend(ValidationError::field("email", "Email already exists").0);
    }
    if !errors.is_empty() {
        return Err(ValidationError(errors).into());
    }

    Ok(())
}
