//! Tenant resolution from the page host name. The tenant is the left-most
//! label of the host (`acme.example.com` -> `acme`). No normalization or
//! registry lookup happens here; the identity provider validates tenants.

use crate::error::{Error, Result};
use std::fmt;
use tracing::warn;

/// Returns the host up to, excluding, the first `.`; the whole host when it
/// has no `.`.
#[must_use]
pub fn tenant_label(host: &str) -> &str {
    host.split_once('.').map_or(host, |(label, _)| label)
}

/// Logical customer partition scoping accounts in the shared user pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    /// Derives the tenant from a host name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHost`] when the left-most label is empty.
    pub fn from_host(host: &str) -> Result<Self> {
        let label = tenant_label(host);
        if label.is_empty() {
            return Err(Error::InvalidHost(host.to_string()));
        }
        if label.len() == host.len() {
            warn!(host, "host has no subdomain, using it as tenant id");
        }
        Ok(Self(label.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{TenantId, tenant_label};
    use crate::error::Error;
    use proptest::prelude::*;

    #[test]
    fn label_is_prefix_before_first_dot() {
        assert_eq!(tenant_label("acme.example.com"), "acme");
        assert_eq!(tenant_label("a.b"), "a");
        assert_eq!(tenant_label("acme."), "acme");
        assert_eq!(tenant_label(".example.com"), "");
    }

    #[test]
    fn label_without_dot_is_whole_host() {
        for host in ["localhost", "acme", "", "ACME-Corp"] {
            assert_eq!(tenant_label(host), host);
        }
    }

    #[test]
    fn label_is_not_normalized() {
        assert_eq!(tenant_label("AcMe.Example.com"), "AcMe");
    }

    #[test]
    fn tenant_from_host() -> anyhow::Result<()> {
        let tenant = TenantId::from_host("acme.example.com")?;
        assert_eq!(tenant.as_str(), "acme");
        assert_eq!(tenant.to_string(), "acme");

        let tenant = TenantId::from_host("localhost")?;
        assert_eq!(tenant.as_str(), "localhost");
        Ok(())
    }

    #[test]
    fn tenant_rejects_empty_label() {
        assert!(matches!(TenantId::from_host(""), Err(Error::InvalidHost(_))));
        assert!(matches!(
            TenantId::from_host(".example.com"),
            Err(Error::InvalidHost(host)) if host == ".example.com"
        ));
    }

    proptest! {
        /// Property: the label is the host up to the first `.`
        #[test]
        fn label_is_text_before_first_dot(label in "[^.]*", rest in "\\PC*") {
            let host = format!("{label}.{rest}");
            prop_assert_eq!(tenant_label(&host), label.as_str());
        }

        /// Property: a host without `.` is its own label
        #[test]
        fn dotless_host_is_whole_label(host in "[^.]*") {
            prop_assert_eq!(tenant_label(&host), host.as_str());
        }

        /// Property: a non-empty label always yields a tenant equal to it
        #[test]
        fn tenant_matches_label(host in "[a-z0-9-]{1,20}(\\.[a-z0-9-]{1,20}){0,3}") {
            let tenant = TenantId::from_host(&host);
            prop_assert!(tenant.is_ok());
            if let Ok(tenant) = tenant {
                prop_assert_eq!(tenant.as_str(), tenant_label(&host));
            }
        }
    }
}
