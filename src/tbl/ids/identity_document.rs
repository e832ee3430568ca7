use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityDocumentError {
    #[error("Identity document is empty")]
    Empty,

    #[error("Identity document must contain only digits: {0:?}")]
    NonDigit(String),
}

/// Natural-person identifier (CPF), the unique lookup key for clients
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityDocument(String);

impl IdentityDocument {
    pub fn parse(string: &str) -> Result<Self, IdentityDocumentError> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            return Err(IdentityDocumentError::Empty);
        }

        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentityDocumentError::NonDigit(trimmed.to_string()));
        }

        return Ok(Self(trimmed.to_string()));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for IdentityDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
