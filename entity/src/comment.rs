use sea_orm::entity::prelude::*;

/// A comment on a post.
///
/// `parent_id` is `None` for top-level comments. Responses of a comment are the
/// rows whose `parent_id` equals its `id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub author_id: String,
    pub post_id: String,
    pub parent_id: Option<String>,
    pub votes: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
