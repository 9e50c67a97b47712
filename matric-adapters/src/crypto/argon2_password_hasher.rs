use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use matric_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

/// Argon2id password hasher. Each hash gets a fresh random salt, and the
/// actual computation runs on the blocking thread pool so it does not stall
/// the async runtime.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2_instance() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<HashedPassword, PasswordHasherError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        let hash = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                let hasher = argon2_instance()?;
                hasher
                    .hash_password(password.expose().as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hashing(e.to_string()))?
        .map_err(PasswordHasherError::Hashing)?;

        HashedPassword::from_stored(hash).map_err(|e| PasswordHasherError::Hashing(e.to_string()))
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify_password(
        &self,
        candidate: &Secret<String>,
        stored: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = candidate.clone();
        let stored = stored.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = PasswordHash::new(stored.expose())
                    .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                let verifier =
                    argon2_instance().map_err(PasswordHasherError::Hashing)?;
                match verifier
                    .verify_password(candidate.expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hashing(e.to_string()))?
    }
}
