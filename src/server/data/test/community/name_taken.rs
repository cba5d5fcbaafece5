use super::*;

/// Tests community name uniqueness checks.
///
/// Expected: taken for other communities, free when the only match is `except_id`
#[tokio::test]
async fn ignores_excepted_community() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let community = factory::community::CommunityFactory::new(db, &user.id)
        .name("rustaceans")
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert!(repo.name_taken("rustaceans", None).await?);
    assert!(!repo.name_taken("rustaceans", Some(&community.id)).await?);
    assert!(!repo.name_taken("gophers", None).await?);

    Ok(())
}
