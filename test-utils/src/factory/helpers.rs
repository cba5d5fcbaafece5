//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique 24-character hexadecimal identifier.
///
/// Identifiers are zero-padded counter values, so later calls sort after earlier ones.
///
/// # Returns
/// - `String` - 24 lowercase hex characters
pub fn next_object_id() -> String {
    format!("{:024x}", next_id())
}

/// Creates a post together with its author and community.
///
/// The author is also the community's creator.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, community, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::community::Model,
        entity::post::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let community = crate::factory::community::create_community(db, &user.id).await?;
    let post = crate::factory::post::create_post(db, &user.id, &community.id).await?;

    Ok((user, community, post))
}
