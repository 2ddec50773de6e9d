//! Login credential validation.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email/password pair submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair. Call [`Credentials::validate`] before
    /// sending it anywhere.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the credential shape locally, before any network call.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is not well formed or the password is
    /// shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> DomainResult<()> {
        if !is_well_formed_email(&self.email) {
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// `local@domain` with a non-empty local part and a dotted domain.
fn is_well_formed_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        assert_eq!(
            Credentials::new("test@example.com", "password").validate(),
            Ok(())
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "no-at-sign",
            "@example.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@example.com.",
            "user name@example.com",
            "user@exam@ple.com",
        ] {
            let err = Credentials::new(email, "password").validate();
            assert_eq!(err, Err(DomainError::InvalidEmail(email.to_string())));
        }
    }

    #[test]
    fn rejects_short_passwords() {
        assert_eq!(
            Credentials::new("test@example.com", "12345").validate(),
            Err(DomainError::PasswordTooShort {
                min: MIN_PASSWORD_LEN
            })
        );
    }

    #[test]
    fn serializes_as_the_login_body() {
        let body =
            serde_json::to_value(Credentials::new("test@example.com", "password")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "test@example.com", "password": "password"})
        );
    }
}
