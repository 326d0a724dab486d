//! Type definitions for the validation system

mod email_input;
mod file_input;
mod media;
mod phone_input;
mod text_input;
mod url_input;
mod zip_input;

// Re-export commonly used types and functions
pub use email_input::{has_plus_sign, has_subdomain, split_address, EmailInput, InvalidEmail};
pub use file_input::{validate_file_size, validate_media_type, validate_not_empty, FileError};
pub use media::{format_file_size, is_accepted_media_type, mime_types_for, FileExtension, SizeUnit};
pub use phone_input::{InvalidPhoneNumber, PhoneInput};
pub use text_input::{LengthError, TextInput};
pub use url_input::{InvalidUrl, UrlInput};
pub use zip_input::{InvalidZip, ZipInput};
