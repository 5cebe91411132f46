//! User account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Sign-in email, stored normalized (trimmed, lowercase)
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Argon2id hash in PHC string format
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: String,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: Self::normalize_email(email),
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// "First Last", falling back to the email when no name was given
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_email(&self.email)
    }
}

/// Minimal shape check: something before and after a single `@`, and a dot
/// in the domain
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(UserValidationError::InvalidEmail(email.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidEmail(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{}'", email),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized() {
        let user = User::new("  John.Doe@Example.COM ", "John", "Doe", "hash".into());
        assert_eq!(user.email, "john.doe@example.com");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_display_name() {
        let named = User::new("a@b.co", " Ada ", "Lovelace", "h".into());
        assert_eq!(named.display_name(), "Ada Lovelace");

        let anonymous = User::new("a@b.co", "", "", "h".into());
        assert_eq!(anonymous.display_name(), "a@b.co");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("x@y.io").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@y.io").is_err());
        assert!(validate_email("x@localhost").is_err());
        assert!(validate_email("x@@y.io").is_err());
    }
}
