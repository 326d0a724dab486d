//! The application form validator.
//!
//! Synchronous rules run first, in field order. The email plausibility lookup
//! is the only suspending step and runs last; its violation, if any, is
//! appended after the synchronous ones.

use log::{debug, warn};
use once_cell::sync::Lazy;
use tokio::runtime::Handle;
use tokio::time::timeout;

use super::constants::*;
use super::plausibility::{AcceptAll, DomainBlocklist, EmailPlausibility};
use super::record::{ApplicantRecord, JobEntry};
use super::result::{FieldPath, ValidationResult, Violation};
use super::rules::{FileRule, Rule};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::utils::error_messages::*;

const EMAIL: FieldPath = FieldPath::field("email");
const JOBS: FieldPath = FieldPath::field("jobs");
const RESUME: FieldPath = FieldPath::field("resume");

/// Rules attached to one text field of a record
struct FieldRules<T> {
    path: FieldPath,
    value: fn(&T) -> &str,
    rules: Vec<Rule>,
}

impl<T> FieldRules<T> {
    fn check(&self, path: FieldPath, record: &T, violations: &mut Vec<Violation>) {
        let value = (self.value)(record);
        for rule in &self.rules {
            violations.extend(rule.check(path, value));
        }
    }
}

const fn length(min: usize, max: usize, too_short: &'static str, too_long: &'static str) -> Rule {
    Rule::Length {
        min,
        max,
        too_short,
        too_long,
    }
}

static APPLICANT_RULES: Lazy<Vec<FieldRules<ApplicantRecord>>> = Lazy::new(|| {
    vec![
        FieldRules {
            path: FieldPath::field("firstName"),
            value: |r| r.first_name.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                FIRST_NAME_TOO_SHORT,
                FIRST_NAME_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("lastName"),
            value: |r| r.last_name.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                LAST_NAME_TOO_SHORT,
                LAST_NAME_TOO_LONG,
            )],
        },
        FieldRules {
            path: EMAIL,
            value: |r| r.email.as_str(),
            rules: vec![Rule::Email, Rule::NoPlusSign, Rule::NoSubdomain],
        },
        FieldRules {
            path: FieldPath::field("phone"),
            value: |r| r.phone.as_str(),
            rules: vec![Rule::Phone],
        },
        FieldRules {
            path: FieldPath::field("country"),
            value: |r| r.country.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                COUNTRY_TOO_SHORT,
                COUNTRY_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("state"),
            value: |r| r.state.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                STATE_TOO_SHORT,
                STATE_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("city"),
            value: |r| r.city.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                CITY_TOO_SHORT,
                CITY_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("address"),
            value: |r| r.address.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_ADDRESS_LENGTH,
                ADDRESS_TOO_SHORT,
                ADDRESS_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("zip"),
            value: |r| r.zip.as_str(),
            rules: vec![Rule::Zip],
        },
        FieldRules {
            path: FieldPath::field("github"),
            value: |r| r.github.as_str(),
            rules: vec![
                Rule::Url,
                Rule::Contains {
                    needle: "github",
                    message: NOT_A_GITHUB_URL,
                },
            ],
        },
        FieldRules {
            path: FieldPath::field("portfolio"),
            value: |r| r.portfolio.as_str(),
            rules: vec![Rule::Url],
        },
    ]
});

// Paths are relative to one entry and get prefixed with `jobs[i]`
static JOB_RULES: Lazy<Vec<FieldRules<JobEntry>>> = Lazy::new(|| {
    vec![
        FieldRules {
            path: FieldPath::field("title"),
            value: |j| j.title.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_SHORT_CONTENT_LENGTH,
                JOB_TITLE_TOO_SHORT,
                JOB_TITLE_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("company"),
            value: |j| j.company.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_COMPANY_LENGTH,
                JOB_COMPANY_TOO_SHORT,
                JOB_COMPANY_TOO_LONG,
            )],
        },
        FieldRules {
            path: FieldPath::field("description"),
            value: |j| j.description.as_str(),
            rules: vec![length(
                MIN_CONTENT_LENGTH,
                MAX_DESCRIPTION_LENGTH,
                JOB_DESCRIPTION_TOO_SHORT,
                JOB_DESCRIPTION_TOO_LONG,
            )],
        },
    ]
});

const RESUME_RULES: [FileRule; 3] = [
    FileRule::NotEmpty,
    FileRule::MaxSize(MAX_RESUME_SIZE_IN_BYTES),
    FileRule::MediaType(VALID_RESUME_FILE_EXTENSIONS),
];

/// Validates application records against the form rules.
pub struct FormValidator<C = AcceptAll> {
    config: FormConfig,
    checker: C,
}

impl FormValidator<AcceptAll> {
    /// A validator with default settings that trusts every email address
    pub fn offline() -> Self {
        Self::with_config(FormConfig::default(), AcceptAll)
    }
}

impl FormValidator<DomainBlocklist> {
    /// A validator rejecting the domains listed in `config`
    pub fn from_config(config: FormConfig) -> Self {
        let checker = DomainBlocklist::from_config(&config);
        Self::with_config(config, checker)
    }
}

impl<C: EmailPlausibility> FormValidator<C> {
    pub fn new(checker: C) -> Self {
        Self::with_config(FormConfig::default(), checker)
    }

    pub fn with_config(config: FormConfig, checker: C) -> Self {
        Self { config, checker }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Runs every rule on `record`.
    ///
    /// A collaborator failure is returned as an error and no result is
    /// produced for the record.
    ///
    /// Must be awaited inside a tokio runtime with the time driver enabled,
    /// since the plausibility lookup is bounded by a tokio timer. Outside any
    /// tokio runtime `FormError::NoRuntime` is returned.
    pub async fn validate(&self, record: &ApplicantRecord) -> Result<ValidationResult, FormError> {
        debug!("Validating application form");

        let mut violations = self.validate_sync(record);
        if !self.check_plausibility(&record.email).await? {
            violations.push(Violation::new(EMAIL, EMAIL_NOT_VALID));
        }

        debug!(
            "Application form validated with {} violation(s)",
            violations.len()
        );
        Ok(ValidationResult::from_violations(violations))
    }

    /// Like `validate`, but an unavailable collaborator counts as an
    /// implausible address. The same runtime requirement applies; a missing
    /// runtime is logged and the address reported as not valid.
    pub async fn validate_lenient(&self, record: &ApplicantRecord) -> ValidationResult {
        let mut violations = self.validate_sync(record);

        let plausible = match self.check_plausibility(&record.email).await {
            Ok(plausible) => plausible,
            Err(e) => {
                warn!("Treating email as not valid: {}", e);
                false
            }
        };
        if !plausible {
            violations.push(Violation::new(EMAIL, EMAIL_NOT_VALID));
        }

        ValidationResult::from_violations(violations)
    }

    /// Every rule that does not need the plausibility collaborator
    pub fn validate_sync(&self, record: &ApplicantRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        for field in APPLICANT_RULES.iter() {
            field.check(field.path, record, &mut violations);
        }

        if record.jobs.is_empty() {
            violations.push(Violation::new(JOBS, NO_JOBS));
        }
        for (index, job) in record.jobs.iter().enumerate() {
            validate_job(index, job, &mut violations);
        }

        if record.resume.len() > self.config.max_files {
            violations.push(Violation::new(
                RESUME,
                format!("At most {} files can be uploaded", self.config.max_files),
            ));
        }
        for (index, file) in record.resume.iter().enumerate() {
            let path = RESUME.at(index);
            for rule in &RESUME_RULES {
                violations.extend(rule.check(path, file));
            }
        }

        violations
    }

    async fn check_plausibility(&self, address: &str) -> Result<bool, FormError> {
        ensure_runtime()?;
        let limit = self.config.email_check_timeout();

        match timeout(limit, self.checker.check_email(address)).await {
            Ok(Ok(plausible)) => Ok(plausible),
            Ok(Err(source)) => Err(FormError::EmailCheck {
                address: address.to_owned(),
                source,
            }),
            Err(_) => Err(FormError::EmailCheckTimeout { timeout: limit }),
        }
    }
}

/// The plausibility timeout relies on tokio timers, which panic when no
/// runtime is entered
fn ensure_runtime() -> Result<(), FormError> {
    Handle::try_current()
        .map(|_| ())
        .map_err(|_| FormError::NoRuntime)
}

fn validate_job(index: usize, job: &JobEntry, violations: &mut Vec<Violation>) {
    let entry = JOBS.at(index);

    for field in JOB_RULES.iter() {
        field.check(entry.sub(field.path.root()), job, violations);
    }

    let from = entry.sub("from");
    match (job.from, job.to) {
        (Some(start), Some(end)) if start > end => {
            violations.push(Violation::new(from, JOB_DATES_REVERSED));
        }
        (Some(_), Some(_)) => {}
        (start, end) => {
            if start.is_none() {
                violations.push(Violation::new(from, JOB_FROM_REQUIRED));
            }
            if end.is_none() {
                violations.push(Violation::new(entry.sub("to"), JOB_TO_REQUIRED));
            }
        }
    }
}
