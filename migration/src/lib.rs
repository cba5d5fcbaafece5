pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_user_table;
mod m20251019_000002_create_community_table;
mod m20251019_000003_create_community_member_table;
mod m20251019_000004_create_post_table;
mod m20251019_000005_create_post_vote_table;
mod m20251019_000006_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_user_table::Migration),
            Box::new(m20251019_000002_create_community_table::Migration),
            Box::new(m20251019_000003_create_community_member_table::Migration),
            Box::new(m20251019_000004_create_post_table::Migration),
            Box::new(m20251019_000005_create_post_vote_table::Migration),
            Box::new(m20251019_000006_create_comment_table::Migration),
        ]
    }
}
