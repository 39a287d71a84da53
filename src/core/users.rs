//! User lookup service
//!
//! Three read operations over the user side of the store: list all, get by
//! id, get by credentials. Each validates its input shape, treats an empty
//! result as an error, and redacts the secret credential field on every exit
//! path before a record leaves the service boundary.

use std::sync::Arc;

use crate::core::traits::UserStore;
use crate::core::validation;
use crate::types::{ServiceError, User, UserId};

/// Read-only user lookups with mandatory credential redaction
pub struct UserService<S> {
    store: Arc<S>,
}

impl<S> UserService<S>
where
    S: UserStore,
{
    /// Create a new service over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every user, ordered by identifier, redacted
    ///
    /// Fails with `ResourceNotFound` when the store holds no users; an
    /// empty collection is an error by contract.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.store.list_all().await?;

        if users.is_empty() {
            return Err(ServiceError::not_found("users"));
        }

        Ok(users.into_iter().map(User::redacted).collect())
    }

    /// Look up a single user by identifier, redacted
    ///
    /// # Errors
    ///
    /// * `BadRequest` when `id` is not a valid positive identifier
    /// * `ResourceNotFound` when no user with that id exists
    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, ServiceError> {
        if !validation::is_valid_id(u64::from(id)) {
            return Err(ServiceError::bad_request(
                "user id must be a positive integer",
            ));
        }

        self.store
            .get_by_id(id)
            .await?
            .map(User::redacted)
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    /// Look up a user by login name and password, redacted
    ///
    /// # Errors
    ///
    /// * `BadRequest` when either string is empty or blank
    /// * `Auth` when the credentials match no user
    pub async fn get_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, ServiceError> {
        if !validation::is_valid_strings([username, password]) {
            return Err(ServiceError::bad_request(
                "username and password must be non-empty",
            ));
        }

        self.store
            .get_by_credentials(username, password)
            .await?
            .map(User::redacted)
            .ok_or(ServiceError::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory_store::MemoryStore;
    use crate::types::Role;

    fn seeded_service() -> UserService<MemoryStore> {
        let store = MemoryStore::new();
        store.put_user(User {
            id: 1,
            username: "aanderson".to_string(),
            password: Some("s3cret".to_string()),
            role: Role::Admin,
        });
        store.put_user(User {
            id: 2,
            username: "bbaker".to_string(),
            password: Some("hunter2".to_string()),
            role: Role::User,
        });
        UserService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_get_all_users_redacts_every_record() {
        let service = seeded_service();

        let users = service.get_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|user| user.password.is_none()));
    }

    #[tokio::test]
    async fn test_get_all_users_empty_store_is_an_error() {
        let service = UserService::new(Arc::new(MemoryStore::new()));

        assert_eq!(
            service.get_all_users().await.unwrap_err(),
            ServiceError::not_found("users")
        );
    }

    #[tokio::test]
    async fn test_get_user_by_id_redacts() {
        let service = seeded_service();

        let user = service.get_user_by_id(1).await.unwrap();
        assert_eq!(user.username, "aanderson");
        assert!(user.password.is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_id_rejects_zero() {
        let service = seeded_service();

        assert!(matches!(
            service.get_user_by_id(0).await.unwrap_err(),
            ServiceError::BadRequest { .. }
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_id_missing() {
        let service = seeded_service();

        assert_eq!(
            service.get_user_by_id(99).await.unwrap_err(),
            ServiceError::not_found("user")
        );
    }

    #[tokio::test]
    async fn test_get_user_by_credentials_redacts() {
        let service = seeded_service();

        let user = service
            .get_user_by_credentials("bbaker", "hunter2")
            .await
            .unwrap();
        assert_eq!(user.id, 2);
        assert!(user.password.is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_credentials_wrong_password_is_auth_error() {
        let service = seeded_service();

        assert_eq!(
            service
                .get_user_by_credentials("bbaker", "wrong")
                .await
                .unwrap_err(),
            ServiceError::Auth
        );
    }

    #[tokio::test]
    async fn test_get_user_by_credentials_blank_input_is_bad_request() {
        let service = seeded_service();

        assert!(matches!(
            service
                .get_user_by_credentials("", "hunter2")
                .await
                .unwrap_err(),
            ServiceError::BadRequest { .. }
        ));
        assert!(matches!(
            service
                .get_user_by_credentials("bbaker", "   ")
                .await
                .unwrap_err(),
            ServiceError::BadRequest { .. }
        ));
    }
}
