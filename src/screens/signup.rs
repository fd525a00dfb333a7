use super::{ScreenError, ScreenLifetime, ScreenState, required_email};
use crate::{
    client::IdentityClient,
    provider::IdentityProvider,
    routes::{Navigation, PendingRegistration, Route},
    storage::TokenStore,
    tenant::TenantId,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

pub struct SignUpForm {
    pub email: String,
    pub password: SecretString,
}

/// Registers a new account for the tenant named by the page host, then moves
/// to the confirmation screen carrying the email.
pub struct SignUpScreen<P, S> {
    client: IdentityClient<P, S>,
    lifetime: ScreenLifetime,
}

impl<P: IdentityProvider, S: TokenStore> SignUpScreen<P, S> {
    #[must_use]
    pub fn new(client: IdentityClient<P, S>, lifetime: ScreenLifetime) -> Self {
        Self { client, lifetime }
    }

    #[must_use]
    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// # Errors
    /// Returns [`ScreenError::Invalid`] for missing or malformed input and
    /// [`ScreenError::Rejected`] with the provider's message when registration
    /// fails. No navigation happens on error.
    pub async fn submit(&self, host: &str, form: SignUpForm) -> Result<Navigation, ScreenError> {
        let email = match required_email(&form.email) {
            Ok(email) => email,
            Err(err) => return self.lifetime.reject(err),
        };
        if form.password.expose_secret().is_empty() {
            return self
                .lifetime
                .reject(ScreenError::Invalid("Password is required.".to_string()));
        }
        let tenant = match TenantId::from_host(host) {
            Ok(tenant) => tenant,
            Err(err) => return self.lifetime.reject(ScreenError::from_provider(&err)),
        };
        debug!(%tenant, "sign up form submitted");

        self.lifetime
            .run(
                async {
                    self.client
                        .register(&email, &form.password, &tenant)
                        .await
                        .map_err(|err| ScreenError::from_provider(&err))?;
                    Ok(Navigation::with_state(
                        Route::Confirm,
                        PendingRegistration::new(email.clone()),
                    ))
                },
                |navigation| ScreenState::Navigated(navigation.route),
            )
            .await
    }
}
