use super::*;

/// Tests creating a post.
///
/// Expected: Ok with zero votes and no comments
#[tokio::test]
async fn creates_post_with_zero_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let community = factory::create_community(db, &user.id).await?;

    let post = PostRepository::new(db)
        .create(CreatePostParams {
            author_id: user.id.clone(),
            community_id: community.id.clone(),
            title: "Hello".to_string(),
            text: "World".to_string(),
            url: Some("https://example.com".to_string()),
        })
        .await?;

    assert_eq!(post.votes, 0);
    assert!(post.comments.is_empty());
    assert_eq!(post.author_id, user.id);
    assert_eq!(post.community_id, community.id);

    Ok(())
}
