//! The values a job-application form submits.
//!
//! Every field defaults when it is missing from the payload, so an incomplete
//! submission deserializes and then fails validation with readable violations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything an applicant fills in, as sent by the form layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub timezone: Option<String>,
    pub github: String,
    pub portfolio: String,
    pub jobs: Vec<JobEntry>,
    pub resume: Vec<UploadedFile>,
}

/// One position in the applicant's job history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    pub title: String,
    pub company: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub description: String,
}

/// Metadata of a file picked by the applicant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadedFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Media type declared by the browser, e.g. `application/pdf`
    #[serde(rename = "type")]
    pub media_type: String,
}
