use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    matriculation_number::MatriculationNumber,
    student::Student,
};

// StudentStore port trait and errors
#[derive(Debug, Error)]
pub enum StudentStoreError {
    #[error("A student with this matriculation number already has an account")]
    DuplicateMatriculationNumber,
    #[error("A student with this e-mail already has an account")]
    DuplicateEmail,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for StudentStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateMatriculationNumber, Self::DuplicateMatriculationNumber) => true,
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistent collection of students, keyed uniquely by matriculation number
/// and by e-mail.
///
/// The lookup methods take plain string keys on purpose: login must match the
/// stored value exactly, without re-normalizing whatever the caller sent.
/// Uniqueness is additionally enforced by the store itself, so a racing
/// insert that slipped past the existence checks still fails with the
/// matching `Duplicate*` error.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn insert_student(&self, student: Student) -> Result<Student, StudentStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentStoreError>;
    async fn find_by_matriculation_number(
        &self,
        matriculation_number: &str,
    ) -> Result<Option<Student>, StudentStoreError>;
    async fn email_exists(&self, email: &Email) -> Result<bool, StudentStoreError>;
    async fn matriculation_number_exists(
        &self,
        matriculation_number: &MatriculationNumber,
    ) -> Result<bool, StudentStoreError>;
    async fn list_students(&self) -> Result<Vec<Student>, StudentStoreError>;
}
