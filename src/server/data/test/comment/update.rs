use super::*;

/// Tests replacing a comment's text.
///
/// Expected: Ok(Some) with new text and the same votes, author and parent
#[tokio::test]
async fn replaces_text_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let parent = factory::create_comment(db, &user.id, &post.id).await?;
    let comment = factory::comment::CommentFactory::new(db, &user.id, &post.id)
        .parent(parent.id.clone())
        .votes(3)
        .build()
        .await?;

    let updated = CommentRepository::new(db)
        .update(UpdateCommentParams {
            post_id: post.id.clone(),
            id: comment.id.clone(),
            text: "Edited".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.text, "Edited");
    assert_eq!(updated.votes, 3);
    assert_eq!(updated.author_id, user.id);
    assert_eq!(updated.parent_id, Some(parent.id));

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn does_not_insert_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .update(UpdateCommentParams {
            post_id: post.id.clone(),
            id: "000000000000000000000000".to_string(),
            text: "Edited".to_string(),
        })
        .await?;

    assert!(result.is_none());
    assert!(repo.get_all_by_post(&post.id).await?.is_empty());

    Ok(())
}
