//! Independent predicates paired with the message they report.
//!
//! A field owns an ordered list of rules. Every rule is checked, so a value
//! breaking several rules yields several violations.

use super::record::UploadedFile;
use super::result::{FieldPath, Violation};
use super::types::{
    has_plus_sign, has_subdomain, validate_file_size, validate_media_type, validate_not_empty,
    EmailInput, FileError, FileExtension, LengthError, PhoneInput, TextInput, UrlInput, ZipInput,
};
use crate::utils::error_messages::*;

/// A check on a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Character count within `min..=max`
    Length {
        min: usize,
        max: usize,
        too_short: &'static str,
        too_long: &'static str,
    },
    Zip,
    Phone,
    Url,
    /// The raw value must contain `needle`
    Contains {
        needle: &'static str,
        message: &'static str,
    },
    Email,
    /// No `+` in the local part. Empty values pass.
    NoPlusSign,
    /// At most two domain labels. Empty values pass.
    NoSubdomain,
}

impl Rule {
    /// Checks `value`, returning the violation to report on `path` if the
    /// rule does not hold.
    pub fn check(&self, path: FieldPath, value: &str) -> Option<Violation> {
        let message = match self {
            Rule::Length {
                min,
                max,
                too_short,
                too_long,
            } => match TextInput::new(value, *min, *max) {
                Ok(_) => None,
                Err(LengthError::TooShort { .. }) => Some(*too_short),
                Err(LengthError::TooLong { .. }) => Some(*too_long),
            },
            Rule::Zip => ZipInput::new(value).err().map(|_| INVALID_ZIP),
            Rule::Phone => PhoneInput::new(value).err().map(|_| INVALID_PHONE),
            Rule::Url => UrlInput::new(value).err().map(|_| INVALID_URL),
            Rule::Contains { needle, message } => (!value.contains(needle)).then_some(*message),
            Rule::Email => EmailInput::new(value).err().map(|_| INVALID_EMAIL),
            Rule::NoPlusSign => {
                (!value.is_empty() && has_plus_sign(value)).then_some(EMAIL_PLUS_SIGN)
            }
            Rule::NoSubdomain => {
                (!value.is_empty() && has_subdomain(value)).then_some(EMAIL_SUBDOMAIN)
            }
        };

        message.map(|message| Violation::new(path, message))
    }
}

/// A check on an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRule {
    NotEmpty,
    /// Exclusive upper bound in bytes
    MaxSize(u64),
    MediaType(&'static [FileExtension]),
}

impl FileRule {
    pub fn check(&self, path: FieldPath, file: &UploadedFile) -> Option<Violation> {
        let outcome = match self {
            FileRule::NotEmpty => validate_not_empty(file.size),
            FileRule::MaxSize(max_size) => validate_file_size(file.size, *max_size),
            FileRule::MediaType(allowed) => validate_media_type(&file.media_type, allowed),
        };

        outcome
            .err()
            .map(|error: FileError| Violation::new(path, error.to_string()))
    }
}
