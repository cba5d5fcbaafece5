//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs whose claims carry the user id in `sub` and a snapshot of the
//! user DTO taken at sign-in time.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::UserDto,
    server::error::{auth::AuthError, internal::InternalError, AppError},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub user: UserDto,
}

/// Issues and checks bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify tokens
    /// - `ttl_hours` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Signs a token for `user`.
    pub fn issue(&self, user: UserDto) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            user,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| InternalError::TokenSigning(e).into())
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn user_dto() -> UserDto {
        UserDto {
            id: "0000000000000000000000a1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            permission: "regular".to_string(),
            communities: vec![],
            votes: BTreeMap::new(),
            created_at: chrono::DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn round_trips_user() {
        let tokens = TokenService::new("secret", 1);

        let token = tokens.issue(user_dto()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "0000000000000000000000a1");
        assert_eq!(claims.user, user_dto());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("secret", 1).issue(user_dto()).unwrap();

        let result = TokenService::new("other", 1).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_expired_token() {
        // Past the default 60 second leeway
        let token = TokenService::new("secret", -1).issue(user_dto()).unwrap();

        let result = TokenService::new("secret", -1).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
