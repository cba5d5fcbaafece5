//! Post data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    model::post::{CreatePostParams, Post, UpdatePostParams},
    util::object_id,
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post with zero votes and no comments.
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let entity = entity::prelude::Post::insert(entity::post::ActiveModel {
            id: ActiveValue::Set(object_id::generate()),
            title: ActiveValue::Set(params.title),
            text: ActiveValue::Set(params.text),
            url: ActiveValue::Set(params.url),
            author_id: ActiveValue::Set(params.author_id),
            community_id: ActiveValue::Set(params.community_id),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Post::from_entity(entity, Vec::new(), 0))
    }

    /// Finds a post by id with its top-level comment ids and comment count.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.load(entity).await.map(Some)
    }

    /// Gets all posts in creation order.
    pub async fn get_all(&self) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        let mut posts = Vec::with_capacity(entities.len());
        for entity in entities {
            posts.push(self.load(entity).await?);
        }

        Ok(posts)
    }

    /// Checks whether a post with `id` exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces title, text and url of a post.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post
    /// - `Ok(None)` - No post with that id
    pub async fn update(&self, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let result = entity::prelude::Post::update_many()
            .col_expr(entity::post::Column::Title, Expr::value(params.title))
            .col_expr(entity::post::Column::Text, Expr::value(params.text))
            .col_expr(entity::post::Column::Url, Expr::value(params.url))
            .filter(entity::post::Column::Id.eq(&params.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(&params.id).await
    }

    /// Deletes a post row. Comments and votes on it are left in place.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Atomically adds `delta` to a post's vote tally.
    ///
    /// Runs as a single `UPDATE ... SET votes = votes + ?`.
    ///
    /// # Returns
    /// - `Ok(true)` - The post existed and was updated
    /// - `Ok(false)` - No post with that id
    pub async fn add_votes(&self, id: &str, delta: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::Votes,
                Expr::col(entity::post::Column::Votes).add(delta),
            )
            .filter(entity::post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load(&self, entity: entity::post::Model) -> Result<Post, DbErr> {
        let comments: Vec<String> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::PostId.eq(&entity.id))
            .filter(entity::comment::Column::ParentId.is_null())
            .order_by_asc(entity::comment::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        let comment_count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(&entity.id))
            .count(self.db)
            .await?;

        Ok(Post::from_entity(entity, comments, comment_count))
    }
}
