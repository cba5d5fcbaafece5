use super::*;

/// Tests that updating username and email keeps everything else.
///
/// Expected: Ok(Some) with new names, same password hash, role and memberships
#[tokio::test]
async fn preserves_password_role_and_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("stored-hash")
        .admin(true)
        .build()
        .await?;
    let community = factory::create_community(db, &user.id).await?;
    factory::add_member(db, &community.id, &user.id).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id.clone(),
            username: "renamed".to_string(),
            email: "renamed@example.com".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.password_hash, "stored-hash");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.communities, vec![community.id]);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: "000000000000000000000000".to_string(),
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
