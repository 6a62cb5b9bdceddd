//! Password hashing contract.

use crate::error::AppError;

/// One-way password hashing used for account credentials.
///
/// Implementations are CPU bound; callers run them on the blocking pool.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::Argon2Hasher`] - Argon2id with random salts
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plain password into a self-describing (PHC) string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hasher fails.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Checks a plain password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError>;
}
