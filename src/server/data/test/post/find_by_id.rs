use super::*;

/// Tests that only top-level comments are listed on the post.
///
/// Expected: `comments` holds the top-level id, `comment_count` counts responses too
#[tokio::test]
async fn lists_top_level_comments_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let top = factory::create_comment(db, &user.id, &post.id).await?;
    factory::create_response(db, &user.id, &top).await?;

    let loaded = PostRepository::new(db)
        .find_by_id(&post.id)
        .await?
        .unwrap();

    assert_eq!(loaded.comments, vec![top.id]);
    assert_eq!(loaded.comment_count, 2);

    Ok(())
}

/// Tests looking up a missing post.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.find_by_id("000000000000000000000000").await?.is_none());
    assert!(!repo.exists("000000000000000000000000").await?);

    Ok(())
}
