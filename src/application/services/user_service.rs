//! User registration and listing.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering and listing users.
///
/// Passwords are hashed with bcrypt before they reach the repository; the
/// plaintext is dropped here.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// Field-level validation (username and password length, allowed
    /// characters) happens at the request boundary; this method hashes the
    /// password and stores the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(
        &self,
        username: String,
        name: String,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|_| AppError::internal("Password hashing failed", json!({})))?;

        self.repository
            .create(NewUser {
                username,
                name,
                password_hash,
            })
            .await
    }

    /// Lists all registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_user| {
                new_user.username == "Irmeli"
                    && new_user.password_hash != "salainen"
                    && bcrypt::verify("salainen", &new_user.password_hash).unwrap()
            })
            .times(1)
            .returning(|new_user| {
                Ok(User::new(
                    1,
                    new_user.username,
                    new_user.name,
                    new_user.password_hash,
                    Utc::now(),
                ))
            });

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .register("Irmeli".to_string(), "Irmeli Testaaja".to_string(), "salainen")
            .await
            .unwrap();

        assert_eq!(user.username, "Irmeli");
    }

    #[tokio::test]
    async fn test_register_propagates_conflict() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({ "constraint": "users_username_key" }),
            ))
        });

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .register("taken".to_string(), "Uolevi".to_string(), "salainen")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![User::new(
                1,
                "testUsername".to_string(),
                "testName".to_string(),
                "$2b$04$hash".to_string(),
                Utc::now(),
            )])
        });

        let service = UserService::new(Arc::new(mock_repo));

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
    }
}
