//! Validation rules for a job-application form.
//!
//! A form layer deserializes what the applicant typed into an
//! [`ApplicantRecord`] and hands it to a [`FormValidator`]. The validator
//! reports every failed rule at once, each attached to the field it concerns.
//!
//! ```no_run
//! use applicant_form::{ApplicantRecord, FormValidator};
//!
//! # async fn run(payload: &str) -> anyhow::Result<()> {
//! let record: ApplicantRecord = serde_json::from_str(payload)?;
//! let result = FormValidator::offline().validate(&record).await?;
//! for (field, messages) in result.by_field() {
//!     println!("{}: {}", field, messages.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod utils;

pub use config::FormConfig;
pub use error::FormError;
pub use utils::validation::{
    AcceptAll, ApplicantRecord, DomainBlocklist, EmailPlausibility, FieldPath, FormValidator,
    JobEntry, UploadedFile, ValidationResult, Violation,
};
