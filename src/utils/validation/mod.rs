//! Root module for the validation system.
//! Exposes the public API for application form validation.

mod constants;
mod form;
mod plausibility;
mod record;
mod result;
mod rules;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use form::FormValidator;
pub use plausibility::{AcceptAll, DomainBlocklist, EmailPlausibility};
pub use record::{ApplicantRecord, JobEntry, UploadedFile};
pub use result::{FieldPath, ValidationResult, Violation};
pub use rules::{FileRule, Rule};
pub use types::*;
