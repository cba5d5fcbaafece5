use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommunityMember::Table)
                    .if_not_exists()
                    .col(string_len(CommunityMember::CommunityId, 24))
                    .col(string_len(CommunityMember::UserId, 24))
                    .col(
                        timestamp_with_time_zone(CommunityMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CommunityMember::CommunityId)
                            .col(CommunityMember::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Membership lookups from the user side
        manager
            .create_index(
                Index::create()
                    .name("idx_community_member_user_id")
                    .table(CommunityMember::Table)
                    .col(CommunityMember::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommunityMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommunityMember {
    Table,
    CommunityId,
    UserId,
    JoinedAt,
}
