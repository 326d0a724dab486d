//! Represents a syntactically valid email address.
//!
//! This module provides a type-safe wrapper around email addresses that ensures
//! they meet standard email format requirements. It uses the validator crate
//! to perform validation according to HTML5 email specifications.
//!
//! It also exposes the address-shape checks the application form applies on
//! top of plain syntax: no plus-addressing and no subdomains.

use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid email format")]
pub struct InvalidEmail;

/// A validated email address that is guaranteed to meet format requirements.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided email string.
    ///
    /// Unlike user-facing text fields, the address is not trimmed: surrounding
    /// whitespace makes it invalid.
    ///
    /// # Returns
    /// * `Ok(EmailInput)` if the email is valid
    /// * `Err(InvalidEmail)` otherwise
    pub fn new(email: &str) -> Result<Self, InvalidEmail> {
        if email.is_empty() || !email.validate_email() {
            return Err(InvalidEmail);
        }

        Ok(Self {
            email: email.to_owned(),
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }

    /// The part before the `@`
    pub fn local_part(&self) -> &str {
        split_address(&self.email).0
    }

    /// The part after the `@`
    pub fn domain(&self) -> &str {
        split_address(&self.email).1.unwrap_or_default()
    }
}

/// Splits a raw address into its local part and, when an `@` is present, the
/// text between the first and second `@`.
///
/// Works on unvalidated input so the shape checks can run independently of
/// the syntax check.
pub fn split_address(address: &str) -> (&str, Option<&str>) {
    let mut parts = address.split('@');
    let local = parts.next().unwrap_or_default();
    (local, parts.next())
}

/// Whether the local part uses plus-addressing (`user+tag@...`)
pub fn has_plus_sign(address: &str) -> bool {
    split_address(address).0.contains('+')
}

/// Whether the domain has more than two labels (`mail.example.com`)
pub fn has_subdomain(address: &str) -> bool {
    match split_address(address).1 {
        Some(domain) => domain.split('.').count() > 2,
        None => false,
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "user@mail.example.com",
        ];

        for email in valid_emails {
            let result = EmailInput::new(email);
            assert!(result.is_ok(), "Should accept valid email: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let binding = "a".repeat(255);
        let invalid_emails = vec![
            "",
            " ",
            "not-an-email",
            "@example.com",
            "user@",
            "user@.com",
            "user name@example.com",
            "   user@example.com   ",
            &binding,
        ];

        for email in invalid_emails {
            let result = EmailInput::new(email);
            assert!(result.is_err(), "Should reject invalid email: {}", email);
        }
    }

    #[test]
    fn test_address_parts() {
        let email = EmailInput::new("jane.doe@example.com").unwrap();
        assert_eq!(email.local_part(), "jane.doe");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_plus_sign_detection() {
        let cases = vec![
            ("user+tag@example.com", true),
            ("user@example.com", false),
            ("user+tag", true),
            ("user@exa+mple.com", false),
            ("", false),
        ];

        for (address, expected) in cases {
            assert_eq!(
                has_plus_sign(address),
                expected,
                "Failed for address: {}",
                address
            );
        }
    }

    #[test]
    fn test_subdomain_detection() {
        let cases = vec![
            ("user@example.com", false),
            ("user@mail.example.com", true),
            ("user@a.b.c.d", true),
            ("user@localhost", false),
            ("no-at-sign.example.com", false),
            ("", false),
        ];

        for (address, expected) in cases {
            assert_eq!(
                has_subdomain(address),
                expected,
                "Failed for address: {}",
                address
            );
        }
    }

    #[test]
    fn test_display_and_asref() {
        let email = EmailInput::new("user@example.com").unwrap();

        assert_eq!(format!("{}", email), "user@example.com");

        let reference: &str = email.as_ref();
        assert_eq!(reference, "user@example.com");
    }
}
