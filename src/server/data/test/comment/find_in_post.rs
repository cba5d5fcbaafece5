use super::*;

/// Tests that lookups are scoped to the post.
///
/// Expected: Some for the owning post, None for any other post
#[tokio::test]
async fn scopes_lookup_to_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, community, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other_post = factory::create_post(db, &user.id, &community.id).await?;
    let comment = factory::create_comment(db, &user.id, &post.id).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.find_in_post(&post.id, &comment.id).await?.is_some());
    assert!(repo.find_in_post(&other_post.id, &comment.id).await?.is_none());
    assert!(repo.exists_in_post(&post.id, &comment.id).await?);
    assert!(!repo.exists_in_post(&other_post.id, &comment.id).await?);

    Ok(())
}

/// Tests that responses are listed in creation order.
///
/// Expected: response ids sorted the way they were created
#[tokio::test]
async fn lists_responses_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let parent = factory::create_comment(db, &user.id, &post.id).await?;
    let first = factory::create_response(db, &user.id, &parent).await?;
    let second = factory::create_response(db, &user.id, &parent).await?;

    let loaded = CommentRepository::new(db)
        .find_in_post(&post.id, &parent.id)
        .await?
        .unwrap();

    assert_eq!(loaded.responses, vec![first.id, second.id]);

    Ok(())
}
