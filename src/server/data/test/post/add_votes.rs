use super::*;

/// Tests incrementing and decrementing the tally.
///
/// Expected: tally reflects the sum of all deltas
#[tokio::test]
async fn applies_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = PostRepository::new(db);
    assert!(repo.add_votes(&post.id, 2).await?);
    assert!(repo.add_votes(&post.id, -1).await?);

    let loaded = repo.find_by_id(&post.id).await?.unwrap();
    assert_eq!(loaded.votes, 1);

    Ok(())
}

/// Tests voting on a missing post.
///
/// Expected: Ok(false), nothing written
#[tokio::test]
async fn reports_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PostRepository::new(db)
        .add_votes("000000000000000000000000", 1)
        .await?;

    assert!(!updated);

    Ok(())
}
