//! Email plausibility checks performed by a collaborator outside the form,
//! such as a deliverability service.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use super::types::split_address;
use crate::config::FormConfig;

/// Judges whether an address is real, beyond its syntax.
///
/// `Ok(false)` means the address was judged implausible. `Err` means the
/// check itself could not be performed.
#[async_trait]
pub trait EmailPlausibility: Send + Sync {
    async fn check_email(&self, address: &str) -> Result<bool>;
}

#[async_trait]
impl<T: EmailPlausibility + ?Sized> EmailPlausibility for Arc<T> {
    async fn check_email(&self, address: &str) -> Result<bool> {
        (**self).check_email(address).await
    }
}

/// Considers every address plausible
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

#[async_trait]
impl EmailPlausibility for AcceptAll {
    async fn check_email(&self, _address: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Rejects addresses hosted on a known set of domains, typically disposable
/// mail providers.
#[derive(Debug, Clone, Default)]
pub struct DomainBlocklist {
    domains: HashSet<String>,
}

impl DomainBlocklist {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|domain| domain.as_ref().trim().to_lowercase())
                .filter(|domain| !domain.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(&config.blocked_email_domains)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[async_trait]
impl EmailPlausibility for DomainBlocklist {
    async fn check_email(&self, address: &str) -> Result<bool> {
        // Addresses without a domain are the syntax check's business
        let Some(domain) = split_address(address).1 else {
            return Ok(true);
        };

        let blocked = self.domains.contains(&domain.to_lowercase());
        if blocked {
            debug!("Domain {} is blocked", domain);
        }
        Ok(!blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accept_all() {
        assert!(AcceptAll.check_email("anything").await.unwrap());
    }

    #[tokio::test]
    async fn test_domain_blocklist() {
        let blocklist = DomainBlocklist::new(["mailinator.com", " Trashmail.com ", ""]);
        assert_eq!(blocklist.len(), 2);

        let cases = vec![
            ("user@example.com", true),
            ("user@mailinator.com", false),
            ("user@MAILINATOR.COM", false),
            ("user@trashmail.com", false),
            ("no-domain", true),
        ];

        for (address, plausible) in cases {
            assert_eq!(
                blocklist.check_email(address).await.unwrap(),
                plausible,
                "Unexpected plausibility for {}",
                address
            );
        }
    }

    #[tokio::test]
    async fn test_blocklist_from_config() {
        let config = FormConfig {
            blocked_email_domains: vec!["yopmail.com".to_string()],
            ..FormConfig::default()
        };
        let checker: Arc<dyn EmailPlausibility> = Arc::new(DomainBlocklist::from_config(&config));

        assert!(!checker.check_email("user@yopmail.com").await.unwrap());
        assert!(checker.check_email("user@example.com").await.unwrap());
    }
}
