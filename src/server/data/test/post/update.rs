use super::*;

/// Tests replacing a post's content.
///
/// Expected: Ok(Some) with new content, same votes, author and community
#[tokio::test]
async fn preserves_votes_author_and_community() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let community = factory::create_community(db, &user.id).await?;
    let post = factory::post::PostFactory::new(db, &user.id, &community.id)
        .votes(7)
        .build()
        .await?;

    let updated = PostRepository::new(db)
        .update(UpdatePostParams {
            id: post.id.clone(),
            title: "New title".to_string(),
            text: "New text".to_string(),
            url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.votes, 7);
    assert_eq!(updated.author_id, user.id);
    assert_eq!(updated.community_id, community.id);

    Ok(())
}
