use secrecy::{ExposeSecret, Secret};

use super::student::StudentError;

/// A raw password accepted for registration.
///
/// The only domain rule is that it must not be blank; everything else is the
/// hasher's business. The inner value stays wrapped in [`Secret`] so it never
/// shows up in debug output or serialized payloads.
#[derive(Clone, Debug)]
pub struct Password(Secret<String>);

impl Password {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = StudentError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(StudentError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[cfg(debug_assertions)]
impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// A password hash in PHC string form, as produced by the [`PasswordHasher`]
/// port. Never empty and never the raw password.
///
/// [`PasswordHasher`]: crate::ports::services::PasswordHasher
#[derive(Clone, Debug)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    /// Wraps a hash restored from the store.
    pub fn from_stored(hash: String) -> Result<Self, StudentError> {
        if hash.is_empty() {
            return Err(StudentError::EmptyPasswordHash);
        }
        Ok(Self(Secret::from(hash)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
