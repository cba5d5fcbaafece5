//! Post management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{community::CommunityRepository, post::PostRepository},
    error::{validation::ValidationError, AppError},
    model::{
        post::{CreatePostParams, Post, UpdatePostParams},
        user::User,
    },
    util::object_id,
};

const MODIFY_FORBIDDEN: &str = "Only the author or an admin can modify this post";

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all().await?)
    }

    /// Gets a post by id.
    ///
    /// # Returns
    /// - `Ok(Post)` - The post with its top-level comment ids
    /// - `Err(AppError::NotFound)` - Malformed id or no such post
    pub async fn get(&self, id: &str) -> Result<Post, AppError> {
        object_id::require(id, "post")?;

        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| object_id::not_found("post", id))
    }

    /// Creates a post in an existing community.
    ///
    /// # Returns
    /// - `Ok(Post)` - The saved post with zero votes
    /// - `Err(AppError::ValidationErr)` - `Community doesn't exist`
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        if !object_id::is_valid(&params.community_id)
            || !CommunityRepository::new(self.db)
                .exists(&params.community_id)
                .await?
        {
            return Err(ValidationError::field("community", "Community doesn't exist").into());
        }

        let post = PostRepository::new(self.db).create(params).await?;

        tracing::debug!("Post {} created in community {}", post.id, post.community_id);

        Ok(post)
    }

    /// Replaces title, text and url of a post.
    pub async fn update(&self, params: UpdatePostParams, actor: &User) -> Result<Post, AppError> {
        let existing = self.get(&params.id).await?;
        ensure_can_modify(&existing, actor)?;

        let id = params.id.clone();
        PostRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| object_id::not_found("post", &id))
    }

    /// Deletes a post. Its comments and recorded votes stay in place.
    pub async fn delete(&self, id: &str, actor: &User) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        ensure_can_modify(&existing, actor)?;

        if !PostRepository::new(self.db).delete(id).await? {
            return Err(object_id::not_found("post", id));
        }

        Ok(())
    }
}

fn ensure_can_modify(post: &Post, actor: &User) -> Result<(), AppError> {
    if post.author_id == actor.id || actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(MODIFY_FORBIDDEN.to_string()))
    }
}
