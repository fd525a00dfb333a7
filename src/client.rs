//! Tenant-aware facade over an [`IdentityProvider`]. It decides what the
//! provider receives for each step of the flow (attributes, client metadata)
//! and owns the single persisted side effect: the access token written on
//! login.

use crate::{
    error::Result,
    provider::{
        AuthSession, ClientMetadata, CurrentUser, IdentityProvider, SignUpOutcome, SignUpRequest,
    },
    storage::{ACCESS_TOKEN_KEY, TokenStore},
    tenant::TenantId,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info};

/// User attribute carrying the tenant on registration.
pub const TENANT_ATTRIBUTE: &str = "custom:tenantId";
/// Client metadata key for the tenant on registration.
pub const SIGN_UP_TENANT_METADATA: &str = "subdomain";
/// Client metadata key for the tenant on authentication.
pub const AUTH_TENANT_METADATA: &str = "tenantId";

pub struct IdentityClient<P, S> {
    provider: P,
    store: S,
}

impl<P: IdentityProvider, S: TokenStore> IdentityClient<P, S> {
    #[must_use]
    pub fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    /// Registers `email` with the tenant attached as attribute and metadata.
    ///
    /// # Errors
    /// Returns the provider error unmodified (duplicate account, weak
    /// password, malformed input).
    pub async fn register(
        &self,
        email: &str,
        password: &SecretString,
        tenant: &TenantId,
    ) -> Result<SignUpOutcome> {
        let request = SignUpRequest {
            username: email.to_string(),
            password: SecretString::from(password.expose_secret().to_string()),
            attributes: vec![
                ("email".to_string(), email.to_string()),
                (TENANT_ATTRIBUTE.to_string(), tenant.to_string()),
            ],
            client_metadata: ClientMetadata::from([(
                SIGN_UP_TENANT_METADATA.to_string(),
                tenant.to_string(),
            )]),
        };

        match self.provider.sign_up(request).await {
            Ok(outcome) => {
                info!(%tenant, confirmed = outcome.user_confirmed, "sign up accepted");
                Ok(outcome)
            }
            Err(err) => {
                error!(%tenant, "sign up error: {err}");
                Err(err)
            }
        }
    }

    /// # Errors
    /// Returns the provider error for an invalid or expired code or an
    /// unknown account.
    pub async fn confirm_registration(&self, email: &str, code: &str) -> Result<()> {
        self.provider
            .confirm_sign_up(email, code)
            .await
            .inspect(|()| info!("registration confirmed"))
            .inspect_err(|err| error!("confirmation error: {err}"))
    }

    /// Authenticates and stores the access token under [`ACCESS_TOKEN_KEY`].
    ///
    /// # Errors
    /// Returns the provider error for bad credentials, a rejected tenant, or
    /// an unconfirmed account, and [`crate::Error::Storage`] if the token cannot be
    /// persisted.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
        tenant: &TenantId,
    ) -> Result<AuthSession> {
        let metadata =
            ClientMetadata::from([(AUTH_TENANT_METADATA.to_string(), tenant.to_string())]);

        let session = self
            .provider
            .initiate_auth(email, password, metadata)
            .await
            .inspect_err(|err| error!(%tenant, "login error: {err}"))?;

        self.store
            .set(ACCESS_TOKEN_KEY, session.access_token.expose_secret())
            .inspect_err(|err| error!("failed to persist access token: {err}"))?;

        info!(%tenant, "login succeeded");
        Ok(session)
    }

    /// Recovers the signed-in user from the stored token, if any.
    ///
    /// # Errors
    /// Returns the provider error when the token is rejected, or
    /// [`crate::Error::Storage`] if storage is unavailable.
    pub async fn current_session(&self) -> Result<Option<CurrentUser>> {
        let Some(token) = self.store.get(ACCESS_TOKEN_KEY)? else {
            debug!("no stored access token");
            return Ok(None);
        };
        if token.trim().is_empty() {
            return Ok(None);
        }

        let user = self
            .provider
            .get_user(&SecretString::from(token))
            .await
            .inspect_err(|err| error!("session retrieval error: {err}"))?;
        Ok(Some(user))
    }

    /// # Errors
    /// Returns the provider error unmodified.
    pub async fn resend_confirmation_code(&self, email: &str) -> Result<()> {
        self.provider
            .resend_confirmation_code(email)
            .await
            .inspect(|()| info!("confirmation code resent"))
            .inspect_err(|err| error!("resend confirmation error: {err}"))
    }
}

impl<P, S> std::fmt::Debug for IdentityClient<P, S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IdentityClient").finish_non_exhaustive()
    }
}
