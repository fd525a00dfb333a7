//! Seam between the flow and the managed identity provider. Implementations
//! own the wire protocol; callers only see these operations and [`Error`].
//!
//! Futures are not `Send`: the browser runs them on a single-threaded executor.
//!
//! [`Error`]: crate::Error

use crate::error::Result;
use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::BTreeMap;

/// Call-scoped metadata forwarded to provider-side triggers.
pub type ClientMetadata = BTreeMap<String, String>;

/// Account registration submitted to the provider.
#[derive(Debug)]
pub struct SignUpRequest {
    pub username: String,
    pub password: SecretString,
    pub attributes: Vec<(String, String)>,
    pub client_metadata: ClientMetadata,
}

/// Provider acknowledgement of a registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user_confirmed: bool,
    pub user_sub: Option<String>,
}

/// Tokens issued on successful authentication.
#[derive(Debug)]
pub struct AuthSession {
    pub access_token: SecretString,
    pub id_token: Option<SecretString>,
    pub refresh_token: Option<SecretString>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

/// User recovered from a validated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub attributes: Vec<(String, String)>,
}

impl CurrentUser {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Registers an unconfirmed account.
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome>;

    /// Confirms a pending account with the code delivered out-of-band.
    async fn confirm_sign_up(&self, username: &str, code: &str) -> Result<()>;

    /// Authenticates with username and password.
    async fn initiate_auth(
        &self,
        username: &str,
        password: &SecretString,
        client_metadata: ClientMetadata,
    ) -> Result<AuthSession>;

    /// Validates an access token and returns the user it belongs to.
    async fn get_user(&self, access_token: &SecretString) -> Result<CurrentUser>;

    /// Sends a new confirmation code for a pending account.
    async fn resend_confirmation_code(&self, username: &str) -> Result<()>;
}
