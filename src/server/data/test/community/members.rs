use super::*;

/// Tests that subscribing twice keeps a single membership.
///
/// Expected: first add creates, second is a no-op
#[tokio::test]
async fn add_member_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let community = factory::create_community(db, &user.id).await?;

    let repo = CommunityRepository::new(db);
    assert!(repo.add_member(&community.id, &user.id).await?);
    assert!(!repo.add_member(&community.id, &user.id).await?);

    let loaded = repo.find_by_id(&community.id).await?.unwrap();
    assert_eq!(loaded.members, vec![user.id]);

    Ok(())
}

/// Tests removing a membership.
///
/// Expected: true when removed, false when the user was not a member
#[tokio::test]
async fn remove_member_reports_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let community = factory::create_community(db, &user.id).await?;
    factory::add_member(db, &community.id, &user.id).await?;

    let repo = CommunityRepository::new(db);
    assert!(repo.remove_member(&community.id, &user.id).await?);
    assert!(!repo.remove_member(&community.id, &user.id).await?);

    let loaded = repo.find_by_id(&community.id).await?.unwrap();
    assert!(loaded.members.is_empty());

    Ok(())
}
