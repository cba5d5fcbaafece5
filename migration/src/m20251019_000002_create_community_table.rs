use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Community::Table)
                    .if_not_exists()
                    .col(string_len(Community::Id, 24).primary_key())
                    .col(string_len_uniq(Community::Name, 21))
                    .col(string(Community::Subtitle))
                    .col(text(Community::Description))
                    .col(string_null(Community::Icon))
                    .col(string_len(Community::CreatorId, 24))
                    .col(
                        timestamp_with_time_zone(Community::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Community::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Community {
    Table,
    Id,
    Name,
    Subtitle,
    Description,
    Icon,
    CreatorId,
    CreatedAt,
}
