use super::*;

/// Tests creating a community.
///
/// Verifies that the creator is recorded but not subscribed.
///
/// Expected: Ok with no members and no posts
#[tokio::test]
async fn creates_community_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let community = CommunityRepository::new(db)
        .create(CreateCommunityParams {
            creator_id: user.id.clone(),
            name: "rustaceans".to_string(),
            subtitle: "Crabs".to_string(),
            description: "All things Rust".to_string(),
            icon: None,
        })
        .await?;

    assert_eq!(community.id.len(), 24);
    assert_eq!(community.creator_id, user.id);
    assert!(community.members.is_empty());
    assert_eq!(community.post_count, 0);

    Ok(())
}
