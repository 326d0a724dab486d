//! Provides a length-checked text representation.
//!
//! Form fields such as names, locations and job descriptions are bounded in
//! length. Lengths are counted in characters, not bytes, so accented names are
//! measured the way the user sees them.

use std::fmt;
use thiserror::Error;

/// Why a text value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("text is shorter than the minimum length of {min}")]
    TooShort { min: usize },
    #[error("text exceeds the maximum length of {max}")]
    TooLong { max: usize },
}

/// Represents text whose length lies within known bounds.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextInput {
    text_content: String,
}

impl TextInput {
    /// Creates a new `TextInput` if `content` has between `min` and `max`
    /// characters, both inclusive.
    ///
    /// The content is kept as-is: surrounding whitespace counts towards the
    /// length.
    pub fn new(content: &str, min: usize, max: usize) -> Result<Self, LengthError> {
        let length = content.chars().count();

        if length < min {
            return Err(LengthError::TooShort { min });
        }

        if length > max {
            return Err(LengthError::TooLong { max });
        }

        Ok(Self {
            text_content: content.to_owned(),
        })
    }

    /// Returns the validated content as a string slice
    pub fn as_str(&self) -> &str {
        &self.text_content
    }

    /// Returns the length of the content in characters
    pub fn len(&self) -> usize {
        self.text_content.chars().count()
    }

    /// Returns whether the content is empty.
    /// Only possible when the minimum length was zero.
    pub fn is_empty(&self) -> bool {
        self.text_content.is_empty()
    }
}

impl fmt::Display for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text_content)
    }
}

impl AsRef<str> for TextInput {
    fn as_ref(&self) -> &str {
        &self.text_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content() {
        let valid_contents = vec![
            "Jo",
            "Simple text",
            "Text with unicode ñáéíóú",
            "  padded  ",
        ];

        for content in valid_contents {
            let result = TextInput::new(content, 2, 70);
            assert!(result.is_ok(), "Should accept valid content: {}", content);
        }
    }

    #[test]
    fn test_content_length_limits() {
        let too_long = "a".repeat(71);
        let cases: Vec<(&str, Result<usize, LengthError>)> = vec![
            ("", Err(LengthError::TooShort { min: 2 })),
            ("a", Err(LengthError::TooShort { min: 2 })),
            (too_long.as_str(), Err(LengthError::TooLong { max: 70 })),
        ];

        for (content, expected) in cases {
            assert_eq!(
                TextInput::new(content, 2, 70).map(|t| t.len()),
                expected,
                "Unexpected result for content of {} characters",
                content.chars().count()
            );
        }

        assert!(TextInput::new(&"a".repeat(70), 2, 70).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        // 2 characters, 4 bytes
        let text = TextInput::new("éé", 2, 2).unwrap();
        assert_eq!(text.len(), 2);
        assert!(TextInput::new(&"é".repeat(70), 2, 70).is_ok());
    }

    #[test]
    fn test_astral_characters_count_once() {
        // One scalar value each, although a browser counts two UTF-16 units
        let text = TextInput::new("😀😀", 2, 2).unwrap();
        assert_eq!(text.len(), 2);
        assert!(TextInput::new("😀", 2, 70).is_err());
        assert!(TextInput::new(&"😀".repeat(70), 2, 70).is_ok());
    }

    #[test]
    fn test_whitespace_is_kept() {
        let text = TextInput::new("  ", 2, 70).unwrap();
        assert_eq!(text.as_str(), "  ");
    }

    #[test]
    fn test_display_and_asref() {
        let content = TextInput::new("Test content", 2, 70).unwrap();

        assert_eq!(format!("{}", content), "Test content");

        let reference: &str = content.as_ref();
        assert_eq!(reference, "Test content");
    }
}
