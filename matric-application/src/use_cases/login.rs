use matric_core::{PasswordHasher, PasswordHasherError, Student, StudentStore, StudentStoreError};
use secrecy::Secret;

/// Error types specific to the login use case.
///
/// Note that "no such account" and "wrong password" are not errors: both
/// verification paths return `Ok(false)` so callers cannot tell registered
/// accounts apart from unknown ones.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Student store error: {0}")]
    StoreError(String),
    #[error("Password verification error: {0}")]
    HasherError(String),
}

impl From<StudentStoreError> for LoginError {
    fn from(error: StudentStoreError) -> Self {
        LoginError::StoreError(error.to_string())
    }
}

impl From<PasswordHasherError> for LoginError {
    fn from(error: PasswordHasherError) -> Self {
        LoginError::HasherError(error.to_string())
    }
}

/// Login use case - verifies credentials against the stored hash.
///
/// Lookups use the supplied key exactly as given; normalization is the
/// caller's business. A key that never passed registration simply matches
/// nothing and yields `false`.
pub struct LoginUseCase<'a, S, H>
where
    S: StudentStore,
    H: PasswordHasher,
{
    student_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> LoginUseCase<'a, S, H>
where
    S: StudentStore,
    H: PasswordHasher,
{
    pub fn new(student_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            student_store,
            password_hasher,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::by_email", skip_all)]
    pub async fn by_email(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<bool, LoginError> {
        let student = self.student_store.find_by_email(email).await?;
        self.verify(student, password).await
    }

    #[tracing::instrument(name = "LoginUseCase::by_matriculation_number", skip_all)]
    pub async fn by_matriculation_number(
        &self,
        matriculation_number: &str,
        password: &Secret<String>,
    ) -> Result<bool, LoginError> {
        let student = self
            .student_store
            .find_by_matriculation_number(matriculation_number)
            .await?;
        self.verify(student, password).await
    }

    async fn verify(
        &self,
        student: Option<Student>,
        password: &Secret<String>,
    ) -> Result<bool, LoginError> {
        let Some(student) = student else {
            tracing::debug!("no account for supplied login key");
            return Ok(false);
        };

        let matches = self
            .password_hasher
            .verify_password(password, student.password_hash())
            .await?;
        if !matches {
            tracing::debug!("password does not match");
        }
        Ok(matches)
    }
}
