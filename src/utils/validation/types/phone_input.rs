//! Phone numbers checked against libphonenumber metadata.

use phonenumber::{Mode, PhoneNumber};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid phone number")]
pub struct InvalidPhoneNumber;

/// A phone number in international notation that is valid for its region.
#[derive(Debug, Clone)]
pub struct PhoneInput {
    number: PhoneNumber,
}

impl PhoneInput {
    /// Parses `value` without a default region, so the number must carry its
    /// country calling code (`+41 ...`).
    pub fn new(value: &str) -> Result<Self, InvalidPhoneNumber> {
        let number = phonenumber::parse(None, value).map_err(|_| InvalidPhoneNumber)?;

        if !phonenumber::is_valid(&number) {
            return Err(InvalidPhoneNumber);
        }

        Ok(Self { number })
    }

    /// The number in E.164 form, e.g. `+41446681800`
    pub fn e164(&self) -> String {
        self.number.format().mode(Mode::E164).to_string()
    }
}

impl fmt::Display for PhoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number.format().mode(Mode::International))
    }
}
