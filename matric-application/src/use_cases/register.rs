use matric_core::{
    DisplayName, Email, MatriculationNumber, Password, PasswordHasher, PasswordHasherError,
    Student, StudentError, StudentStore, StudentStoreError,
};
use secrecy::Secret;

/// Raw registration input as received from the boundary, before any
/// validation or normalization.
#[derive(Debug)]
pub struct Registration {
    pub matriculation_number: String,
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    InvalidInput(#[from] StudentError),
    #[error("A student with this matriculation number already has an account")]
    DuplicateMatriculationNumber,
    #[error("A student with this e-mail already has an account")]
    DuplicateEmail,
    #[error("Failed to hash password: {0}")]
    HashingError(String),
    #[error("Student store error: {0}")]
    StoreError(String),
}

impl From<StudentStoreError> for RegisterError {
    fn from(error: StudentStoreError) -> Self {
        match error {
            StudentStoreError::DuplicateMatriculationNumber => {
                RegisterError::DuplicateMatriculationNumber
            }
            StudentStoreError::DuplicateEmail => RegisterError::DuplicateEmail,
            StudentStoreError::UnexpectedError(e) => RegisterError::StoreError(e),
        }
    }
}

impl From<PasswordHasherError> for RegisterError {
    fn from(error: PasswordHasherError) -> Self {
        RegisterError::HashingError(error.to_string())
    }
}

/// Register use case - validates input, enforces uniqueness and creates the
/// student record.
pub struct RegisterUseCase<'a, S, H>
where
    S: StudentStore,
    H: PasswordHasher,
{
    student_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
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

    /// Execute the register use case.
    ///
    /// Checks run in a fixed order so that inputs violating several rules at
    /// once always produce the same error: blank password, then
    /// matriculation-number format, then e-mail format, then name, then
    /// matriculation-number uniqueness, then e-mail uniqueness. Nothing is
    /// persisted unless every check passes.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, registration: Registration) -> Result<Student, RegisterError> {
        let password = Password::try_from(registration.password)?;
        let matriculation_number = MatriculationNumber::try_from(registration.matriculation_number)?;
        let email = Email::try_from(registration.email)?;
        let name = DisplayName::try_from(registration.name)?;

        if self
            .student_store
            .matriculation_number_exists(&matriculation_number)
            .await?
        {
            return Err(RegisterError::DuplicateMatriculationNumber);
        }
        if self.student_store.email_exists(&email).await? {
            return Err(RegisterError::DuplicateEmail);
        }

        let password_hash = self.password_hasher.hash_password(&password).await?;
        let student = Student::new(matriculation_number, name, email, password_hash);

        let stored = self.student_store.insert_student(student).await?;
        tracing::info!(
            matriculation_number = stored.matriculation_number().as_str(),
            "registered new student"
        );
        Ok(stored)
    }
}
