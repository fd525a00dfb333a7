//! Identity provider configuration. Both identifiers are public values that
//! ship to the browser; do not put secrets here.

use crate::error::{Error, Result};
use url::Url;

/// Environment variable holding the user pool id (`<region>_<id>`).
pub const ENV_USER_POOL_ID: &str = "TENANTGATE_USER_POOL_ID";
/// Environment variable holding the app client id.
pub const ENV_CLIENT_ID: &str = "TENANTGATE_CLIENT_ID";
/// Optional environment variable overriding the provider endpoint.
pub const ENV_ENDPOINT: &str = "TENANTGATE_ENDPOINT";

/// Connection settings for the Cognito user pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    pub user_pool_id: String,
    pub client_id: String,
    /// Overrides the regional endpoint, used for proxies and tests.
    pub endpoint: Option<String>,
}

impl IdentityConfig {
    #[must_use]
    pub fn new(user_pool_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Reads the configuration from `TENANTGATE_*` environment variables.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the pool or client id is missing or empty.
    pub fn from_env() -> Result<Self> {
        let user_pool_id = required_env(ENV_USER_POOL_ID)?;
        let client_id = required_env(ENV_CLIENT_ID)?;
        let config = Self {
            user_pool_id,
            client_id,
            endpoint: std::env::var(ENV_ENDPOINT)
                .ok()
                .and_then(|value| normalize(&value)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both identifiers are present and the pool id carries a region.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::Config("client id is not configured".to_string()));
        }
        self.region()?;
        Ok(())
    }

    /// Region prefix of the user pool id (`us-east-2_3NUtAHXmB` -> `us-east-2`).
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the pool id has no `<region>_` prefix.
    pub fn region(&self) -> Result<&str> {
        match self.user_pool_id.trim().split_once('_') {
            Some((region, id)) if !region.is_empty() && !id.is_empty() => Ok(region),
            _ => Err(Error::Config(format!(
                "invalid user pool id: {:?}",
                self.user_pool_id
            ))),
        }
    }

    /// Provider endpoint: the override if set, otherwise the regional endpoint.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the URL cannot be parsed or uses a scheme
    /// other than http/https.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.trim().to_string(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region()?),
        };

        let url = Url::parse(&raw)
            .map_err(|err| Error::Config(format!("invalid endpoint {raw:?}: {err}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::Config(format!("unsupported scheme {scheme}"))),
        }
    }
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .and_then(|value| normalize(&value))
        .ok_or_else(|| Error::Config(format!("{name} is not set")))
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
