//! Community management and subscriptions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{community::CommunityRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    model::{
        community::{Community, CreateCommunityParams, UpdateCommunityParams},
        user::User,
    },
    util::object_id,
};

const EDIT_FORBIDDEN: &str = "Only the creator can edit this community";
const DELETE_FORBIDDEN: &str = "Only the creator can delete this community";
const NAME_TAKEN: &str = "Community name already exists";

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every community in creation order.
    pub async fn get_all(&self) -> Result<Vec<Community>, AppError> {
        Ok(CommunityRepository::new(self.db).get_all().await?)
    }

    /// Gets a community by id.
    ///
    /// # Returns
    /// - `Ok(Community)` - The community with members and post count
    /// - `Err(AppError::NotFound)` - Malformed id or no such community
    pub async fn get(&self, id: &str) -> Result<Community, AppError> {
        object_id::require(id, "community")?;

        CommunityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| object_id::not_found("community", id))
    }

    /// Creates a community. The creator is not subscribed automatically.
    pub async fn create(&self, params: CreateCommunityParams) -> Result<Community, AppError> {
        let repo = CommunityRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(name_taken());
        }

        let community = match repo.create(params).await.map_err(AppError::from) {
            Err(err) if err.is_unique_violation() => return Err(name_taken()),
            result => result?,
        };

        tracing::info!("Community {} ({}) created", community.name, community.id);

        Ok(community)
    }

    /// Replaces a community's editable fields.
    ///
    /// # Returns
    /// - `Ok(Community)` - The updated community
    /// - `Err(AppError::NotFound)` - No such community
    /// - `Err(AppError::Forbidden)` - `actor` is not the creator
    /// - `Err(AppError::ValidationErr)` - Another community already has the name
    pub async fn update(
        &self,
        params: UpdateCommunityParams,
        actor: &User,
    ) -> Result<Community, AppError> {
        let existing = self.get(&params.id).await?;
        if existing.creator_id != actor.id {
            return Err(AppError::Forbidden(EDIT_FORBIDDEN.to_string()));
        }

        let repo = CommunityRepository::new(self.db);
        if repo.name_taken(&params.name, Some(&params.id)).await? {
            return Err(name_taken());
        }

        let id = params.id.clone();
        match repo.update(params).await.map_err(AppError::from) {
            Err(err) if err.is_unique_violation() => Err(name_taken()),
            result => result?.ok_or_else(|| object_id::not_found("community", &id)),
        }
    }

    /// Deletes a community. Posts and memberships stay in place.
    pub async fn delete(&self, id: &str, actor: &User) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        if existing.creator_id != actor.id {
            return Err(AppError::Forbidden(DELETE_FORBIDDEN.to_string()));
        }

        if !CommunityRepository::new(self.db).delete(id).await? {
            return Err(object_id::not_found("community", id));
        }

        Ok(())
    }

    /// Adds `user_id` to the community's member set. Subscribing twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(Community)` - The community after the change
    /// - `Err(AppError::NotFound)` - Community or user does not exist
    pub async fn subscribe(&self, id: &str, user_id: &str) -> Result<Community, AppError> {
        self.ensure_exists(id, user_id).await?;

        if CommunityRepository::new(self.db).add_member(id, user_id).await? {
            tracing::debug!("User {} subscribed to community {}", user_id, id);
        }

        self.get(id).await
    }

    /// Removes `user_id` from the community's member set.
    pub async fn unsubscribe(&self, id: &str, user_id: &str) -> Result<Community, AppError> {
        self.ensure_exists(id, user_id).await?;

        if CommunityRepository::new(self.db)
            .remove_member(id, user_id)
            .await?
        {
            tracing::debug!("User {} unsubscribed from community {}", user_id, id);
        }

        self.get(id).await
    }

    async fn ensure_exists(&self, id: &str, user_id: &str) -> Result<(), AppError> {
        object_id::require(id, "community")?;
        if !CommunityRepository::new(self.db).exists(id).await? {
            return Err(object_id::not_found("community", id));
        }

        object_id::require(user_id, "user")?;
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(object_id::not_found("user", user_id));
        }

        Ok(())
    }
}

fn name_taken() -> AppError {
    ValidationError::field("name", NAME_TAKEN).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn create_params(creator_id: &str, name: &str) -> CreateCommunityParams {
        CreateCommunityParams {
            creator_id: creator_id.to_string(),
            name: name.to_string(),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
            icon: None,
        }
    }

    async fn load_user(db: &DatabaseConnection, id: &str) -> User {
        UserRepository::new(db).find_by_id(id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;

        let service = CommunityService::new(db);
        let created = service.create(create_params(&user.id, "rustaceans")).await?;
        assert!(created.members.is_empty());

        let duplicate = service.create(create_params(&user.id, "rustaceans")).await;

        let Err(AppError::ValidationErr(err)) = duplicate else {
            panic!("expected validation error");
        };
        assert_eq!(err.messages(), vec![NAME_TAKEN]);

        Ok(())
    }

    /// Creates two communities with the same name at the same time.
    ///
    /// Expected: one succeeds and the other gets the duplicate-name validation error
    #[tokio::test]
    async fn concurrent_duplicate_names_are_validation_errors() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;

        let first = CommunityService::new(db);
        let second = CommunityService::new(db);
        let (a, b) = tokio::join!(
            first.create(create_params(&user.id, "rustaceans")),
            second.create(create_params(&user.id, "rustaceans")),
        );

        let (created, rejected) = match (a, b) {
            (Ok(created), Err(rejected)) | (Err(rejected), Ok(created)) => (created, rejected),
            other => panic!("expected exactly one success, got {:?}", other),
        };
        assert_eq!(created.name, "rustaceans");
        let AppError::ValidationErr(err) = rejected else {
            panic!("expected validation error, got {:?}", rejected);
        };
        assert_eq!(err.messages(), vec![NAME_TAKEN]);

        Ok(())
    }

    #[tokio::test]
    async fn renaming_to_taken_name_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let creator = factory::create_user(db).await?;
        let actor = load_user(db, &creator.id).await;

        let service = CommunityService::new(db);
        service.create(create_params(&creator.id, "rustaceans")).await?;
        let other = service.create(create_params(&creator.id, "gophers")).await?;

        let result = service
            .update(
                UpdateCommunityParams {
                    id: other.id.clone(),
                    name: "rustaceans".to_string(),
                    subtitle: "Subtitle".to_string(),
                    description: "Description".to_string(),
                    icon: None,
                },
                &actor,
            )
            .await;

        let Err(AppError::ValidationErr(err)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(err.messages(), vec![NAME_TAKEN]);

        Ok(())
    }

    #[tokio::test]
    async fn subscribe_and_unsubscribe_update_both_sides() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let creator = factory::create_user(db).await?;
        let member = factory::create_user(db).await?;
        let community = factory::create_community(db, &creator.id).await?;

        let service = CommunityService::new(db);

        let subscribed = service.subscribe(&community.id, &member.id).await?;
        let again = service.subscribe(&community.id, &member.id).await?;
        assert_eq!(subscribed.members, vec![member.id.clone()]);
        assert_eq!(again.members, vec![member.id.clone()]);
        assert_eq!(
            load_user(db, &member.id).await.communities,
            vec![community.id.clone()]
        );

        let unsubscribed = service.unsubscribe(&community.id, &member.id).await?;
        assert!(unsubscribed.members.is_empty());
        assert!(load_user(db, &member.id).await.communities.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn subscribe_reports_missing_community_and_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let community = factory::create_community(db, &user.id).await?;

        let service = CommunityService::new(db);

        let no_community = service
            .subscribe("0000000000000000000000ff", &user.id)
            .await;
        assert!(matches!(
            no_community,
            Err(AppError::NotFound(ref msg)) if msg == "No community with id 0000000000000000000000ff found"
        ));

        let no_user = service
            .subscribe(&community.id, "0000000000000000000000ff")
            .await;
        assert!(matches!(
            no_user,
            Err(AppError::NotFound(ref msg)) if msg == "No user with id 0000000000000000000000ff found"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn only_creator_may_edit() -> Result<(), AppError> {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let creator = factory::create_user(db).await?;
        let admin = factory::user::create_admin(db).await?;
        let community = factory::create_community(db, &creator.id).await?;

        let service = CommunityService::new(db);
        let params = UpdateCommunityParams {
            id: community.id.clone(),
            name: community.name.clone(),
            subtitle: "Edited".to_string(),
            description: "Edited".to_string(),
            icon: None,
        };

        let denied = service
            .update(params.clone(), &load_user(db, &admin.id).await)
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden(ref msg)) if msg == EDIT_FORBIDDEN));

        // Keeping the community's own name does not count as a duplicate
        let updated = service
            .update(params, &load_user(db, &creator.id).await)
            .await?;
        assert_eq!(updated.subtitle, "Edited");
        assert_eq!(updated.creator_id, creator.id);

        Ok(())
    }
}
