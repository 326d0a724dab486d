//! Infrastructure errors. Rule failures are never errors, they are reported as
//! violations in a `ValidationResult`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// The plausibility collaborator could not give an answer
    #[error("email plausibility check failed for {address}")]
    EmailCheck {
        address: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("email plausibility check timed out after {timeout:?}")]
    EmailCheckTimeout { timeout: Duration },

    /// The form was validated outside a tokio runtime
    #[error("email plausibility check needs a tokio runtime")]
    NoRuntime,

    #[error("invalid configuration document")]
    ConfigDocument(#[from] serde_yaml::Error),

    #[error("invalid value {value:?} for {key}")]
    ConfigValue { key: &'static str, value: String },
}
