use super::*;

/// Tests creating a response.
///
/// Verifies the parent gains exactly one response id.
///
/// Expected: Ok with parent's responses containing the new id
#[tokio::test]
async fn response_is_listed_on_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let parent = factory::create_comment(db, &user.id, &post.id).await?;

    let repo = CommentRepository::new(db);
    let response = repo
        .create(CreateCommentParams {
            post_id: post.id.clone(),
            author_id: user.id.clone(),
            text: "Reply".to_string(),
            parent_id: Some(parent.id.clone()),
        })
        .await?;

    assert_eq!(response.votes, 0);
    assert!(response.responses.is_empty());

    let parent = repo.find_in_post(&post.id, &parent.id).await?.unwrap();
    assert_eq!(parent.responses, vec![response.id]);

    Ok(())
}
