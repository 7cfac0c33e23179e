// src/models/user.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("username pattern is valid"));

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username, the session identity.
    pub username: String,

    /// Unique email address.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A user row that has not been written yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Signup form.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username length must be between 3 and 50 characters."
        ),
        regex(path = *USERNAME_PATTERN, message = "Username may only contain letters, digits, '.', '_' and '-'.")
    )]
    pub username: String,
    #[validate(email(message = "Email address is not valid."))]
    pub email: String,
    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}

impl SignupForm {
    /// Strips surrounding whitespace from the identity fields.
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// Login form.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username length must be between 1 and 50 characters."
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password length must be between 1 and 128 characters."
    ))]
    pub password: String,
}

/// Names of the fields that failed validation, for logging.
/// Never includes the submitted values.
pub fn invalid_fields(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
    fields.sort_unstable();
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_form_accepts_valid_input() {
        assert!(form("alice", "alice@example.com", "secret").validate().is_ok());
    }

    #[test]
    fn test_signup_form_rejects_short_username() {
        assert!(form("al", "alice@example.com", "secret").validate().is_err());
    }

    #[test]
    fn test_signup_form_rejects_username_with_spaces() {
        assert!(form("al ice", "alice@example.com", "secret").validate().is_err());
    }

    #[test]
    fn test_signup_form_rejects_bad_email() {
        assert!(form("alice", "not-an-email", "secret").validate().is_err());
    }

    #[test]
    fn test_login_errors_do_not_echo_input() {
        let secret = "S3cretPw".repeat(17);
        let errors = LoginForm {
            username: "u".repeat(60),
            password: secret.clone(),
        }
        .validate()
        .unwrap_err();

        let formatted = errors.to_string();
        assert!(!formatted.contains(&secret));
        assert!(!formatted.contains(&"u".repeat(60)));

        assert_eq!(invalid_fields(&errors), "password, username");
    }

    #[test]
    fn test_signup_errors_do_not_echo_input() {
        let secret = "S3cretPw".repeat(17);
        let errors = form("al", "not-an-email", &secret).validate().unwrap_err();

        assert!(!errors.to_string().contains(&secret));
        assert_eq!(invalid_fields(&errors), "email, password, username");
    }

    #[test]
    fn test_trimmed_strips_identity_fields_only() {
        let f = form("  alice ", " alice@example.com ", " pw  ").trimmed();
        assert_eq!(f.username, "alice");
        assert_eq!(f.email, "alice@example.com");
        assert_eq!(f.password, " pw  ");
    }
}
