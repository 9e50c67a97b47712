use std::sync::LazyLock;

use regex::Regex;

use super::student::StudentError;

static MATRICULATION_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("invalid matriculation number regex"));

/// An 8-digit matriculation number, the immutable primary key of a student.
///
/// Parsing trims surrounding whitespace; anything other than exactly eight
/// decimal digits is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatriculationNumber(String);

impl MatriculationNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MatriculationNumber {
    type Error = StudentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if !MATRICULATION_NUMBER_RE.is_match(trimmed) {
            return Err(StudentError::InvalidMatriculationNumber);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for MatriculationNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
