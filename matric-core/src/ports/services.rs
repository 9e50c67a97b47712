use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way salted password hashing plus verification.
///
/// `hash_password` must generate a fresh random salt per call, so two equal
/// raw passwords never share a hash. `verify_password` takes an arbitrary
/// candidate secret rather than a validated [`Password`]: login accepts any
/// input and collapses mismatch and malformed input alike to `false`.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<HashedPassword, PasswordHasherError>;

    async fn verify_password(
        &self,
        candidate: &Secret<String>,
        stored: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;
}
