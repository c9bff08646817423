//! Authentication service: password verification and login tokens.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Claims carried inside a login token (HS256).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Database user ID.
    pub sub: i64,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    fn new(user: &User, ttl_seconds: u64) -> Self {
        let now = Utc::now().timestamp() as usize;
        Self {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + ttl_seconds as usize,
        }
    }
}

/// Service for logging users in and validating bearer tokens.
///
/// Passwords are verified against stored bcrypt hashes. Successful logins
/// produce an HS256 token signed with the server signing secret; token
/// validation also checks that the user still exists.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_seconds: u64,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for credential lookups
    /// - `signing_secret` - HS256 key; must match the value used when
    ///   earlier tokens were issued
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(repository: Arc<R>, signing_secret: &str, token_ttl_seconds: u64) -> Self {
        Self {
            repository,
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            token_ttl_seconds,
        }
    }

    /// Verifies credentials and issues a login token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which part failed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on bad credentials.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AppError::internal("Password verification failed", json!({})))?;

        if !password_matches {
            return Err(Self::invalid_credentials());
        }

        let token = self.issue_token(&user)?;

        Ok((token, user))
    }

    /// Signs a token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let claims = Claims::new(user, self.token_ttl_seconds);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::internal("Failed to issue token", json!({})))
    }

    /// Validates a bearer token and resolves it to the user it was issued
    /// for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed,
    /// expired, has a bad signature, or the user no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired token" }),
                )
            })?;

        self.repository
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "Unknown user" }))
            })
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid username or password" }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_user(password: &str) -> User {
        User::new(
            7,
            "testUsername".to_string(),
            "testName".to_string(),
            bcrypt::hash(password, 4).unwrap(),
            Utc::now(),
        )
    }

    fn service(repo: MockUserRepository) -> AuthService<MockUserRepository> {
        AuthService::new(Arc::new(repo), "test-signing-secret", 3600)
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = test_user("testPassword");
        let mut mock_repo = MockUserRepository::new();

        let found = user.clone();
        mock_repo
            .expect_find_by_username()
            .withf(|username| username == "testUsername")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let service = service(mock_repo);

        let (token, logged_in) = service.login("testUsername", "testPassword").await.unwrap();

        assert!(!token.is_empty());
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = test_user("testPassword");
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(mock_repo);

        let result = service.login("testUsername", "wrongPassword").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_repo);

        let result = service.login("nobody", "whatever").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_roundtrip() {
        let user = test_user("testPassword");
        let mut mock_repo = MockUserRepository::new();

        let found = user.clone();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let service = service(mock_repo);

        let token = service.issue_token(&user).unwrap();
        let authenticated = service.authenticate(&token).await.unwrap();

        assert_eq!(authenticated.id, user.id);
        assert_eq!(authenticated.username, user.username);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage_token() {
        let service = service(MockUserRepository::new());

        let result = service.authenticate("not-a-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_foreign_signature() {
        let user = test_user("testPassword");

        let other = AuthService::new(Arc::new(MockUserRepository::new()), "other-secret", 3600);
        let foreign_token = other.issue_token(&user).unwrap();

        let service = service(MockUserRepository::new());
        let result = service.authenticate(&foreign_token).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_expired_token() {
        let user = test_user("testPassword");
        let service = service(MockUserRepository::new());

        // Hand-craft claims that expired well past any validation leeway.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        let result = service.authenticate(&token).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_deleted_user() {
        let user = test_user("testPassword");
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_repo);

        let token = service.issue_token(&user).unwrap();
        let result = service.authenticate(&token).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }
}
