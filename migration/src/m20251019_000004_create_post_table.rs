use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(string_len(Post::Id, 24).primary_key())
                    .col(string(Post::Title))
                    .col(text(Post::Text))
                    .col(string_null(Post::Url))
                    .col(string_len(Post::AuthorId, 24))
                    .col(string_len(Post::CommunityId, 24))
                    .col(integer(Post::Votes).default(0))
                    .col(
                        timestamp_with_time_zone(Post::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_community_id")
                    .table(Post::Table)
                    .col(Post::CommunityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Text,
    Url,
    AuthorId,
    CommunityId,
    Votes,
    CreatedAt,
}
