//! Comment operations scoped to a post.

pub mod tree;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::{validation::ValidationError, AppError},
    model::{
        comment::{Comment, CommentNode, CreateCommentParams, UpdateCommentParams},
        user::User,
    },
    util::object_id,
};

const MODIFY_FORBIDDEN: &str = "Only the author or an admin can modify this comment";

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the reply trees of a post.
    ///
    /// A post with no comments, or no post at all, yields an empty list.
    pub async fn get_tree(&self, post_id: &str, max_depth: usize) -> Result<Vec<CommentNode>, AppError> {
        let rows = CommentRepository::new(self.db).get_all_by_post(post_id).await?;

        Ok(tree::build(rows, max_depth))
    }

    /// Gets a single comment on a post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment with its response ids
    /// - `Err(AppError::NotFound)` - Malformed id, or no such comment on the post
    pub async fn get(&self, post_id: &str, id: &str) -> Result<Comment, AppError> {
        object_id::require(id, "comment")?;

        CommentRepository::new(self.db)
            .find_in_post(post_id, id)
            .await?
            .ok_or_else(|| object_id::not_found("comment", id))
    }

    /// Creates a comment on a post, optionally as a response to another comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The saved comment
    /// - `Err(AppError::NotFound)` - The post does not exist
    /// - `Err(AppError::ValidationErr)` - The parent is not a comment on this post
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        object_id::require(&params.post_id, "post")?;
        if !PostRepository::new(self.db).exists(&params.post_id).await? {
            return Err(object_id::not_found("post", &params.post_id));
        }

        let repo = CommentRepository::new(self.db);

        if let Some(parent_id) = &params.parent_id {
            if !repo.exists_in_post(&params.post_id, parent_id).await? {
                return Err(
                    ValidationError::field("parent", "Parent comment doesn't exist").into(),
                );
            }
        }

        let comment = repo.create(params).await?;

        tracing::debug!("Comment {} created on post {}", comment.id, comment.post_id);

        Ok(comment)
    }

    /// Replaces the text of a comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(AppError::NotFound)` - No such comment on the post
    /// - `Err(AppError::Forbidden)` - `actor` is neither the author nor an admin
    pub async fn update(
        &self,
        params: UpdateCommentParams,
        actor: &User,
    ) -> Result<Comment, AppError> {
        let existing = self.get(&params.post_id, &params.id).await?;
        ensure_can_modify(&existing, actor)?;

        let id = params.id.clone();
        CommentRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| object_id::not_found("comment", &id))
    }

    /// Deletes a comment. Its responses stay stored but drop out of the tree.
    pub async fn delete(&self, post_id: &str, id: &str, actor: &User) -> Result<(), AppError> {
        let existing = self.get(post_id, id).await?;
        ensure_can_modify(&existing, actor)?;

        if !CommentRepository::new(self.db).delete(post_id, id).await? {
            return Err(object_id::not_found("comment", id));
        }

        Ok(())
    }
}

fn ensure_can_modify(comment: &Comment, actor: &User) -> Result<(), AppError> {
    if comment.author_id == actor.id || actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(MODIFY_FORBIDDEN.to_string()))
    }
}
