use super::*;

/// Tests replacing a community's editable fields.
///
/// Expected: Ok(Some) with new fields, creator and members unchanged
#[tokio::test]
async fn preserves_creator_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let community = factory::create_community(db, &user.id).await?;
    factory::add_member(db, &community.id, &member.id).await?;

    let updated = CommunityRepository::new(db)
        .update(UpdateCommunityParams {
            id: community.id.clone(),
            name: "renamed".to_string(),
            subtitle: "New subtitle".to_string(),
            description: "New description".to_string(),
            icon: Some("https://example.com/icon.png".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.icon.as_deref(), Some("https://example.com/icon.png"));
    assert_eq!(updated.creator_id, user.id);
    assert_eq!(updated.members, vec![member.id]);

    Ok(())
}

/// Tests deleting a community leaves its posts in place.
///
/// Expected: community gone, post still present
#[tokio::test]
async fn delete_does_not_cascade() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, community, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = CommunityRepository::new(db);
    assert!(repo.delete(&community.id).await?);
    assert!(!repo.delete(&community.id).await?);

    let remaining = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(remaining.is_some());

    Ok(())
}
