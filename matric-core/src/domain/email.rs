use std::sync::LazyLock;

use regex::Regex;

use super::student::StudentError;

static UNIVERSITY_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@(tum|mytum)\.de$").expect("invalid email regex"));

/// A validated university e-mail address.
///
/// Input is trimmed and lowercased before validation, so the stored form is
/// always normalized. Only `@tum.de` and `@mytum.de` addresses are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = StudentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        if !UNIVERSITY_EMAIL_RE.is_match(&normalized) {
            return Err(StudentError::InvalidEmail);
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
