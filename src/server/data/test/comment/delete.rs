use super::*;

/// Tests deleting a comment scoped to its post.
///
/// Expected: false for the wrong post, true for the right one, false once gone
#[tokio::test]
async fn deletes_only_within_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, community, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other_post = factory::create_post(db, &user.id, &community.id).await?;
    let comment = factory::create_comment(db, &user.id, &post.id).await?;

    let repo = CommentRepository::new(db);

    assert!(!repo.delete(&other_post.id, &comment.id).await?);
    assert!(repo.delete(&post.id, &comment.id).await?);
    assert!(!repo.delete(&post.id, &comment.id).await?);

    Ok(())
}

/// Tests that responses of a deleted comment remain stored.
///
/// Expected: response row still present among the post's rows
#[tokio::test]
async fn leaves_responses_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let parent = factory::create_comment(db, &user.id, &post.id).await?;
    let response = factory::create_response(db, &user.id, &parent).await?;

    let repo = CommentRepository::new(db);
    repo.delete(&post.id, &parent.id).await?;

    let rows = repo.get_all_by_post(&post.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, response.id);

    Ok(())
}
