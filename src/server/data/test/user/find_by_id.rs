use super::*;

/// Tests loading a user with memberships and votes.
///
/// Expected: Ok(Some) with communities in subscription order and the vote map filled
#[tokio::test]
async fn loads_memberships_and_votes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, community, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let second = factory::create_community(db, &user.id).await?;
    factory::add_member(db, &community.id, &user.id).await?;
    factory::add_member(db, &second.id, &user.id).await?;

    let repo = UserRepository::new(db);
    repo.set_vote(&user.id, &post.id, Some(VoteDirection::Up))
        .await?;

    let loaded = repo.find_by_id(&user.id).await?.unwrap();

    assert_eq!(loaded.communities, vec![community.id, second.id]);
    assert_eq!(loaded.votes.get(&post.id), Some(&VoteDirection::Up));

    Ok(())
}

/// Tests looking up a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_by_id("000000000000000000000000")
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests looking up a user by username for log-in.
///
/// Expected: Ok(Some) for an exact match, Ok(None) otherwise
#[tokio::test]
async fn finds_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_username("alice").await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_username("bob").await?.is_none());

    Ok(())
}
