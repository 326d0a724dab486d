//! Absolute URLs, as typed into the profile link fields.

use std::fmt;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid URL format")]
pub struct InvalidUrl;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlInput {
    url: Url,
}

impl UrlInput {
    /// Parses `value` as an absolute URL. Relative references are rejected.
    pub fn new(value: &str) -> Result<Self, InvalidUrl> {
        let url = Url::parse(value).map_err(|_| InvalidUrl)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }
}

impl fmt::Display for UrlInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl AsRef<str> for UrlInput {
    fn as_ref(&self) -> &str {
        self.url.as_str()
    }
}
