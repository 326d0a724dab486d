//! Constants used throughout the validation system

use super::types::{FileExtension, SizeUnit};

/// Minimum length shared by every bounded text field
pub const MIN_CONTENT_LENGTH: usize = 2;
/// Maximum length for names, locations and job titles
pub const MAX_SHORT_CONTENT_LENGTH: usize = 70;
/// Maximum length for a company name
pub const MAX_COMPANY_LENGTH: usize = 90;
/// Maximum length for a postal address
pub const MAX_ADDRESS_LENGTH: usize = 100;
/// Maximum length for a job description
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

pub const MIN_ZIP_DIGITS: usize = 4;
pub const MAX_ZIP_DIGITS: usize = 10;

/// Number of résumé files a form accepts by default
pub const MAX_FILES: usize = 2;

/// Largest accepted résumé, exclusive
pub const MAX_RESUME_SIZE_IN_BYTES: u64 = SizeUnit::Megabytes.to_bytes(10);

pub const VALID_RESUME_FILE_EXTENSIONS: &[FileExtension] = &[FileExtension::Pdf];
