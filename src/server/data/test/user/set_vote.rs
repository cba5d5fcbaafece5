use super::*;

/// Tests that a new direction replaces the recorded one.
///
/// Expected: Ok with a single vote row holding the latest direction
#[tokio::test]
async fn replaces_existing_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    repo.set_vote(&user.id, &post.id, Some(VoteDirection::Up))
        .await?;
    repo.set_vote(&user.id, &post.id, Some(VoteDirection::Down))
        .await?;

    let loaded = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(loaded.votes.len(), 1);
    assert_eq!(loaded.votes.get(&post.id), Some(&VoteDirection::Down));

    Ok(())
}

/// Tests clearing a vote.
///
/// Expected: Ok with the post removed from the vote map
#[tokio::test]
async fn clears_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    repo.set_vote(&user.id, &post.id, Some(VoteDirection::Up))
        .await?;
    repo.set_vote(&user.id, &post.id, None).await?;

    let loaded = repo.find_by_id(&user.id).await?.unwrap();
    assert!(loaded.votes.is_empty());

    Ok(())
}
