//! Local username/password authentication.
//!
//! Sign-up and log-in both end by issuing a bearer token for the user.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Role, SignUpParams, User},
    service::{auth::token::TokenService, user::ensure_unique},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new regular user and signs them in.
    ///
    /// # Returns
    /// - `Ok((User, token))` - The created user and a bearer token
    /// - `Err(AppError::ValidationErr)` - Username or email already exists
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn sign_up(&self, params: SignUpParams) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);
        ensure_unique(&repo, &params.username, &params.email, None).await?;

        let password_hash = password::hash(params.password).await?;

        let created = repo
            .create(CreateUserParams {
                username: params.username.clone(),
                email: params.email.clone(),
                password_hash,
                role: Role::Regular,
            })
            .await;
        let user = match created {
            Err(err) if err.is_unique_violation() => {
                ensure_unique(&repo, &params.username, &params.email, None).await?;
                return Err(err);
            }
            result => result?,
        };

        tracing::info!("User {} signed up", user.id);

        let token = self.tokens.issue(user.clone().into_dto())?;

        Ok((user, token))
    }

    /// Checks credentials and signs the user in.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn log_in(&self, username: &str, password: &str) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.clone().into_dto())?;

        Ok((user, token))
    }
}
