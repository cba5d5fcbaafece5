use super::*;

/// Tests that a valid token resolves to its user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let entity = factory::create_user(db).await?;
    let user = UserRepository::new(db).find_by_id(&entity.id).await?.unwrap();
    let headers = bearer(&tokens.issue(user.clone().into_dto())?);

    let resolved = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = UserRepository::new(db).find_by_id(&entity.id).await?.unwrap();
    let forged = TokenService::new("other-secret", 1).issue(user.into_dto())?;
    let headers = bearer(&forged);

    let tokens = tokens();
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let entity = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    let user = repo.find_by_id(&entity.id).await?.unwrap();
    let headers = bearer(&tokens.issue(user.into_dto())?);
    repo.delete(&entity.id).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the admin permission check.
///
/// Expected: AccessDenied for a regular user, Ok for an admin
#[tokio::test]
async fn requires_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let repo = UserRepository::new(db);

    let regular = factory::create_user(db).await?;
    let regular = repo.find_by_id(&regular.id).await?.unwrap();
    let admin = factory::user::create_admin(db).await?;
    let admin = repo.find_by_id(&admin.id).await?.unwrap();

    let regular_headers = bearer(&tokens.issue(regular.into_dto())?);
    let admin_headers = bearer(&tokens.issue(admin.clone().into_dto())?);

    let denied = AuthGuard::new(db, &tokens, &regular_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let allowed = AuthGuard::new(db, &tokens, &admin_headers)
        .require(&[Permission::Admin])
        .await?;
    assert_eq!(allowed.id, admin.id);

    Ok(())
}
