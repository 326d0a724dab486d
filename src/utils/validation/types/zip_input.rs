//! Postal codes made of digits only.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

use crate::utils::validation::{MAX_ZIP_DIGITS, MIN_ZIP_DIGITS};

// ASCII digits only, `\d` would also accept other Unicode digits
static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{},{}}}$", MIN_ZIP_DIGITS, MAX_ZIP_DIGITS))
        .expect("Failed to compile zip regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("zip code is not made of 4 to 10 ASCII digits")]
pub struct InvalidZip;

/// Wrapper type for a zip code that has been validated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipInput(String);

impl ZipInput {
    pub fn new(value: &str) -> Result<Self, InvalidZip> {
        if ZIP_REGEX.is_match(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidZip)
        }
    }
}

impl fmt::Display for ZipInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zip() {
        let valid_cases = vec!["1234", "1004", "94043", "0123456789"];

        for zip in valid_cases {
            assert!(ZipInput::new(zip).is_ok(), "Valid zip {} was rejected !", zip);
        }
    }

    #[test]
    fn test_invalid_zip() {
        let invalid_cases = vec![
            "12",          // Too short
            "12345678901", // Too long
            "12a4",        // Non-digit
            "1234 ",       // Trailing space
            "١٢٣٤",        // Arabic-Indic digits
            "",
        ];

        for zip in invalid_cases {
            assert!(ZipInput::new(zip).is_err(), "Invalid zip {} was accepted !", zip);
        }
    }
}
