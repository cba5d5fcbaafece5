use super::*;

/// Tests that uniqueness checks can ignore the user being edited.
///
/// Expected: taken for other users, free when the only match is `except_id`
#[tokio::test]
async fn ignores_excepted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("alice", None).await?);
    assert!(!repo.username_taken("alice", Some(&user.id)).await?);
    assert!(repo.email_taken("alice@example.com", None).await?);
    assert!(!repo.email_taken("alice@example.com", Some(&user.id)).await?);
    assert!(!repo.username_taken("bob", None).await?);

    Ok(())
}
