use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostVote::Table)
                    .if_not_exists()
                    .col(string_len(PostVote::UserId, 24))
                    .col(string_len(PostVote::PostId, 24))
                    .col(string_len(PostVote::Direction, 16))
                    .primary_key(Index::create().col(PostVote::UserId).col(PostVote::PostId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostVote {
    Table,
    UserId,
    PostId,
    Direction,
}
