use super::*;

/// Tests creating a user.
///
/// Verifies that the repository generates a 24-character id and stores the
/// provided fields with no memberships or votes.
///
/// Expected: Ok with a regular user
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Regular,
        })
        .await?;

    assert_eq!(user.id.len(), 24);
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::Regular);
    assert!(user.communities.is_empty());
    assert!(user.votes.is_empty());

    Ok(())
}

/// Tests the unique username constraint.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Regular,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
