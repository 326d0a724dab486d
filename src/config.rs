//! Settings of the form validator.
//!
//! Defaults match the application form. They can be overridden from a YAML
//! document or from `FORM_*` environment variables, a `.env` file included.

use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::FormError;
use crate::utils::validation::MAX_FILES;

pub const EMAIL_CHECK_TIMEOUT_VAR: &str = "FORM_EMAIL_CHECK_TIMEOUT_MS";
pub const BLOCKED_EMAIL_DOMAINS_VAR: &str = "FORM_BLOCKED_EMAIL_DOMAINS";
pub const MAX_FILES_VAR: &str = "FORM_MAX_FILES";

const DEFAULT_EMAIL_CHECK_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Upper bound on the plausibility lookup
    pub email_check_timeout_ms: u64,
    /// Domains refused by `DomainBlocklist`
    pub blocked_email_domains: Vec<String>,
    /// Number of résumé files accepted
    pub max_files: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            email_check_timeout_ms: DEFAULT_EMAIL_CHECK_TIMEOUT_MS,
            blocked_email_domains: Vec::new(),
            max_files: MAX_FILES,
        }
    }
}

impl FormConfig {
    pub fn from_yaml_str(document: &str) -> Result<Self, FormError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Loads `.env` if present, then applies the `FORM_*` variables on top of
    /// the defaults.
    pub fn from_env() -> Result<Self, FormError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FormError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(EMAIL_CHECK_TIMEOUT_VAR) {
            config.email_check_timeout_ms = parse_value(EMAIL_CHECK_TIMEOUT_VAR, &value)?;
        }

        if let Some(value) = lookup(BLOCKED_EMAIL_DOMAINS_VAR) {
            config.blocked_email_domains = value
                .split(',')
                .map(str::trim)
                .filter(|domain| !domain.is_empty())
                .map(str::to_owned)
                .collect();
        }

        if let Some(value) = lookup(MAX_FILES_VAR) {
            config.max_files = parse_value(MAX_FILES_VAR, &value)?;
        }

        Ok(config)
    }

    pub fn email_check_timeout(&self) -> Duration {
        Duration::from_millis(self.email_check_timeout_ms)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, FormError> {
    value.trim().parse().map_err(|_| FormError::ConfigValue {
        key,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.email_check_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_files, 2);
        assert!(config.blocked_email_domains.is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let config = FormConfig::from_yaml_str(
            "email_check_timeout_ms: 250\nblocked_email_domains:\n  - mailinator.com\n",
        )
        .unwrap();

        assert_eq!(config.email_check_timeout_ms, 250);
        assert_eq!(config.blocked_email_domains, vec!["mailinator.com"]);
        // Missing keys keep their default
        assert_eq!(config.max_files, MAX_FILES);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = FormConfig::from_yaml_str("email_check_timeout_ms: soon");
        assert!(matches!(result, Err(FormError::ConfigDocument(_))));
    }

    #[test]
    fn test_from_lookup() {
        let lookup = lookup_from(&[
            (EMAIL_CHECK_TIMEOUT_VAR, "1500"),
            (BLOCKED_EMAIL_DOMAINS_VAR, "mailinator.com, yopmail.com,,"),
            (MAX_FILES_VAR, "3"),
        ]);
        let config = FormConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.email_check_timeout(), Duration::from_millis(1500));
        assert_eq!(
            config.blocked_email_domains,
            vec!["mailinator.com", "yopmail.com"]
        );
        assert_eq!(config.max_files, 3);
    }

    #[test]
    fn test_invalid_env_value() {
        let result = FormConfig::from_lookup(lookup_from(&[(MAX_FILES_VAR, "two")]));

        match result {
            Err(FormError::ConfigValue { key, value }) => {
                assert_eq!(key, MAX_FILES_VAR);
                assert_eq!(value, "two");
            }
            other => panic!("Expected a config value error, got {:?}", other),
        }
    }
}
