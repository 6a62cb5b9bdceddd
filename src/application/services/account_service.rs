//! Account management and authentication.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Account, ActiveIdentity, NewAccount, Role};
use crate::domain::password::PasswordHasher;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Service for signing up, authenticating and maintaining accounts.
///
/// Password hashing and verification run on the blocking pool.
pub struct AccountService<R: AccountRepository + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    /// Creates a new account service.
    pub fn new(repository: Arc<R>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Creates an account with the `USER` role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<Account, AppError> {
        self.create_with_roles(username, password, vec![Role::User])
            .await
    }

    /// Creates an account with the `USER` and `ADMIN` roles.
    ///
    /// Callers are expected to sit behind the admin route guard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn create_admin(&self, username: &str, password: &str) -> Result<Account, AppError> {
        self.create_with_roles(username, password, vec![Role::User, Role::Admin])
            .await
    }

    /// Creates the bootstrap admin unless an account with that name exists.
    ///
    /// Returns `true` when the account was created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if self.repository.exists(username).await? {
            return Ok(false);
        }

        match self.create_admin(username, password).await {
            Ok(_) => Ok(true),
            // Lost a race with another instance seeding the same admin.
            Err(AppError::Conflict { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Resolves Basic credentials into the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the
    /// password does not match.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ActiveIdentity, AppError> {
        let Some(account) = self.repository.find_by_username(username).await? else {
            tracing::debug!(username, "authentication failed: unknown user");
            return Err(AppError::unauthorized("Bad credentials"));
        };

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = account.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(join_error)??;

        if !matches {
            tracing::debug!(username, "authentication failed: wrong password");
            return Err(AppError::unauthorized("Bad credentials"));
        }

        Ok(account.into())
    }

    /// Deletes the account of the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionExpired`] if the account no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_account(&self, identity: &ActiveIdentity) -> Result<(), AppError> {
        if !self.repository.delete(&identity.username).await? {
            return Err(AppError::SessionExpired);
        }

        tracing::info!(username = %identity.username, "account deleted");
        Ok(())
    }

    /// Replaces the password of the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionExpired`] if there is no active identity or
    /// its account no longer exists.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn change_password(
        &self,
        identity: Option<&ActiveIdentity>,
        new_password: &str,
    ) -> Result<(), AppError> {
        let identity = identity.ok_or(AppError::SessionExpired)?;

        let password_hash = self.hash(new_password).await?;

        if !self
            .repository
            .update_password(&identity.username, &password_hash)
            .await?
        {
            return Err(AppError::SessionExpired);
        }

        tracing::info!(username = %identity.username, "password changed");
        Ok(())
    }

    /// Lists all accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.repository.list().await
    }

    async fn create_with_roles(
        &self,
        username: &str,
        password: &str,
        roles: Vec<Role>,
    ) -> Result<Account, AppError> {
        if self.repository.exists(username).await? {
            return Err(username_taken(username));
        }

        let password_hash = self.hash(password).await?;

        let account = self
            .repository
            .create(NewAccount {
                username: username.to_string(),
                password_hash,
                roles,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => username_taken(username),
                other => other,
            })?;

        tracing::info!(username = %account.username, roles = ?account.roles, "account created");
        Ok(account)
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(join_error)?
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::conflict(
        "This username is already taken",
        json!({ "username": username }),
    )
}

fn join_error(e: tokio::task::JoinError) -> AppError {
    tracing::error!(error = %e, "password hashing task failed");
    AppError::internal("Password hashing failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::password::MockPasswordHasher;
    use crate::domain::repositories::MockAccountRepository;
    use chrono::Utc;

    fn create_test_account(username: &str, roles: Vec<Role>) -> Account {
        Account {
            id: 1,
            username: username.to_string(),
            password_hash: format!("hash:{username}"),
            roles,
            created_at: Utc::now(),
        }
    }

    fn plain_hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{password}")));
        hasher
            .expect_verify()
            .returning(|password, hash| Ok(hash == format!("hashed:{password}")));
        hasher
    }

    fn service(repo: MockAccountRepository) -> AccountService<MockAccountRepository> {
        AccountService::new(Arc::new(repo), Arc::new(plain_hasher()))
    }

    fn identity(username: &str) -> ActiveIdentity {
        ActiveIdentity {
            username: username.to_string(),
            roles: vec![Role::User],
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_exists()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_create()
            .withf(|new| {
                new.username == "alice"
                    && new.password_hash == "hashed:secret"
                    && new.roles == vec![Role::User]
            })
            .times(1)
            .returning(|new| Ok(create_test_account(&new.username, new.roles)));

        let result = service(mock_repo).create_user("alice", "secret").await;

        assert!(result.is_ok());
        let account = result.unwrap();
        assert!(account.roles.contains(&Role::User));
        assert!(!account.roles.contains(&Role::Admin));
    }

    #[tokio::test]
    async fn test_create_user_taken_name_is_conflict() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let result = service(mock_repo).create_user("alice", "secret").await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "This username is already taken");
    }

    #[tokio::test]
    async fn test_create_user_unique_violation_is_conflict() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::Value::Null,
            ))
        });

        let result = service(mock_repo).create_user("alice", "secret").await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "This username is already taken");
    }

    #[tokio::test]
    async fn test_create_admin_has_both_roles() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|new| new.roles == vec![Role::User, Role::Admin])
            .times(1)
            .returning(|new| Ok(create_test_account(&new.username, new.roles)));

        let account = service(mock_repo)
            .create_admin("root", "secret")
            .await
            .unwrap();

        assert!(account.roles.contains(&Role::Admin));
        assert!(account.roles.contains(&Role::User));
    }

    #[tokio::test]
    async fn test_ensure_admin_skips_existing() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let created = service(mock_repo)
            .ensure_admin("admin", "password")
            .await
            .unwrap();

        assert!(!created);
    }

    #[tokio::test]
    async fn test_ensure_admin_creates_missing() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_exists().times(2).returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new| Ok(create_test_account(&new.username, new.roles)));

        let created = service(mock_repo)
            .ensure_admin("admin", "password")
            .await
            .unwrap();

        assert!(created);
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_username()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| {
                let mut account = create_test_account("alice", vec![Role::User]);
                account.password_hash = "hashed:secret".to_string();
                Ok(Some(account))
            });

        let identity = service(mock_repo)
            .authenticate("alice", "secret")
            .await
            .unwrap();

        assert_eq!(identity.username, "alice");
        assert_eq!(identity.roles, vec![Role::User]);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_find_by_username().times(1).returning(|_| {
            let mut account = create_test_account("alice", vec![Role::User]);
            account.password_hash = "hashed:secret".to_string();
            Ok(Some(account))
        });

        let result = service(mock_repo).authenticate("alice", "nope").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).authenticate("ghost", "secret").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_delete_account_success() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_delete()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(true));

        let result = service(mock_repo).delete_account(&identity("alice")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_account_already_gone() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(mock_repo).delete_account(&identity("alice")).await;

        assert!(matches!(result.unwrap_err(), AppError::SessionExpired));
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_update_password()
            .withf(|name, hash| name == "alice" && hash == "hashed:new-secret")
            .times(1)
            .returning(|_, _| Ok(true));

        let result = service(mock_repo)
            .change_password(Some(&identity("alice")), "new-secret")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_change_password_without_identity() {
        let mut mock_repo = MockAccountRepository::new();
        mock_repo.expect_update_password().never();

        let result = service(mock_repo).change_password(None, "new-secret").await;

        assert!(matches!(result.unwrap_err(), AppError::SessionExpired));
    }

    #[tokio::test]
    async fn test_change_password_account_vanished() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_update_password()
            .times(1)
            .returning(|_, _| Ok(false));

        let result = service(mock_repo)
            .change_password(Some(&identity("alice")), "new-secret")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::SessionExpired));
    }
}
