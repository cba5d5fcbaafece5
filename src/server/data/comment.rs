//! Comment data repository for database operations.
//!
//! Comments are scoped to their post: lookups, updates and deletes all filter on both
//! the comment id and the post id.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
    util::object_id,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment with zero votes and no responses.
    ///
    /// Callers check that the post and parent exist first.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::prelude::Comment::insert(entity::comment::ActiveModel {
            id: ActiveValue::Set(object_id::generate()),
            text: ActiveValue::Set(params.text),
            author_id: ActiveValue::Set(params.author_id),
            post_id: ActiveValue::Set(params.post_id),
            parent_id: ActiveValue::Set(params.parent_id),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Comment::from_entity(entity, Vec::new()))
    }

    /// Finds a comment on a post, with its direct response ids.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found on that post
    /// - `Ok(None)` - No such comment, or it belongs to a different post
    pub async fn find_in_post(&self, post_id: &str, id: &str) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id.to_string())
            .filter(entity::comment::Column::PostId.eq(post_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let responses = self.response_ids(&entity.id).await?;

        Ok(Some(Comment::from_entity(entity, responses)))
    }

    /// Gets every comment row of a post in creation order.
    ///
    /// Returned as raw rows for the reply-tree builder.
    pub async fn get_all_by_post(
        &self,
        post_id: &str,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether a comment exists on the given post.
    pub async fn exists_in_post(&self, post_id: &str, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::PostId.eq(post_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the text of a comment. Votes, author and parent are preserved.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No such comment on that post; nothing was written
    pub async fn update(&self, params: UpdateCommentParams) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(entity::comment::Column::Text, Expr::value(params.text))
            .filter(entity::comment::Column::Id.eq(&params.id))
            .filter(entity::comment::Column::PostId.eq(&params.post_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_in_post(&params.post_id, &params.id).await
    }

    /// Deletes a comment. Its responses stay in the table but are no longer reachable
    /// from the post's tree.
    pub async fn delete(&self, post_id: &str, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn response_ids(&self, id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::ParentId.eq(id))
            .order_by_asc(entity::comment::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}
