use super::*;

/// Tests loading a community with members and posts.
///
/// Expected: Ok(Some) with member ids and post count
#[tokio::test]
async fn counts_members_and_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, community, _) = factory::helpers::create_post_with_dependencies(db).await?;
    factory::create_post(db, &user.id, &community.id).await?;
    factory::add_member(db, &community.id, &user.id).await?;

    let loaded = CommunityRepository::new(db)
        .find_by_id(&community.id)
        .await?
        .unwrap();

    assert_eq!(loaded.members, vec![user.id]);
    assert_eq!(loaded.post_count, 2);

    let dto = loaded.into_dto();
    assert_eq!(dto.member_count, 1);

    Ok(())
}

/// Tests listing communities.
///
/// Expected: Ok with communities in creation order
#[tokio::test]
async fn lists_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_community(db, &user.id).await?;
    let second = factory::create_community(db, &user.id).await?;

    let all = CommunityRepository::new(db).get_all().await?;

    let ids: Vec<_> = all.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
