use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    display_name::DisplayName,
    email::Email,
    matriculation_number::MatriculationNumber,
    password::HashedPassword,
};

/// Validation failures for student fields. Always recoverable by the caller
/// correcting input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudentError {
    #[error("Matriculation number must be exactly 8 digits")]
    InvalidMatriculationNumber,
    #[error("E-mail is not a valid TUM address")]
    InvalidEmail,
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Stored password hash must not be empty")]
    EmptyPasswordHash,
}

/// A registered student as held by the store. All fields are normalized and
/// validated on construction; the record is immutable once created.
#[derive(Clone, Debug)]
pub struct Student {
    matriculation_number: MatriculationNumber,
    name: DisplayName,
    email: Email,
    password_hash: HashedPassword,
}

impl Student {
    pub fn new(
        matriculation_number: MatriculationNumber,
        name: DisplayName,
        email: Email,
        password_hash: HashedPassword,
    ) -> Self {
        Self {
            matriculation_number,
            name,
            email,
            password_hash,
        }
    }

    /// Rebuilds a student from stored columns, revalidating every field.
    pub fn parse(
        matriculation_number: String,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, StudentError> {
        Ok(Self {
            matriculation_number: MatriculationNumber::try_from(matriculation_number)?,
            name: DisplayName::try_from(name)?,
            email: Email::try_from(email)?,
            password_hash: HashedPassword::from_stored(password_hash)?,
        })
    }

    pub fn matriculation_number(&self) -> &MatriculationNumber {
        &self.matriculation_number
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
}

/// Public projection of a [`Student`]. There is no password-hash field here,
/// so the hash cannot leak through serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "matriculationNumber")]
    pub matriculation_number: String,
    pub name: String,
    pub email: String,
}

impl From<&Student> for StudentProfile {
    fn from(student: &Student) -> Self {
        Self {
            matriculation_number: student.matriculation_number.as_str().to_string(),
            name: student.name.as_str().to_string(),
            email: student.email.as_str().to_string(),
        }
    }
}

impl From<Student> for StudentProfile {
    fn from(student: Student) -> Self {
        Self::from(&student)
    }
}
