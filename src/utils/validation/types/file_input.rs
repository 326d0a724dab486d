//! Validation of the metadata of an uploaded résumé: its size and the media
//! type the browser declared for it.
//!
//! The file content is never read here. The form only sees what the file picker
//! reports, so these checks are about what the user is about to submit.

use thiserror::Error;

use super::media::{format_file_size, is_accepted_media_type, FileExtension};
use crate::utils::error_messages::EMPTY_FILE;

/// One reason an uploaded file is refused. The messages are shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("{}", EMPTY_FILE)]
    Empty,
    #[error("File size cannot be greater than {}", size_limit(.max_size))]
    TooLarge { max_size: u64 },
    #[error("Only {} type are allowed", join_extensions(.allowed))]
    MediaType { allowed: Vec<FileExtension> },
}

fn size_limit(max_size: &u64) -> String {
    format_file_size(*max_size)
}

fn join_extensions(extensions: &[FileExtension]) -> String {
    extensions
        .iter()
        .map(|ext| ext.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejects zero-byte uploads
pub fn validate_not_empty(size: u64) -> Result<(), FileError> {
    if size == 0 {
        return Err(FileError::Empty);
    }
    Ok(())
}

/// Validates that the file is strictly smaller than `max_size` bytes
pub fn validate_file_size(size: u64, max_size: u64) -> Result<(), FileError> {
    if size >= max_size {
        return Err(FileError::TooLarge { max_size });
    }
    Ok(())
}

/// Checks the declared media type against the allowed extensions
pub fn validate_media_type(media_type: &str, allowed: &[FileExtension]) -> Result<(), FileError> {
    if !is_accepted_media_type(media_type, allowed) {
        return Err(FileError::MediaType {
            allowed: allowed.to_vec(),
        });
    }
    Ok(())
}
