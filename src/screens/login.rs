use super::{ScreenError, ScreenLifetime, ScreenState, required_email};
use crate::{
    client::IdentityClient,
    provider::IdentityProvider,
    routes::{Navigation, Route},
    storage::TokenStore,
    tenant::TenantId,
};
use secrecy::{ExposeSecret, SecretString};

/// Shown for every authentication failure; the cause is not disclosed.
pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed. Please check your credentials and try again.";

pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

pub struct LoginScreen<P, S> {
    client: IdentityClient<P, S>,
    lifetime: ScreenLifetime,
}

impl<P: IdentityProvider, S: TokenStore> LoginScreen<P, S> {
    #[must_use]
    pub fn new(client: IdentityClient<P, S>, lifetime: ScreenLifetime) -> Self {
        Self { client, lifetime }
    }

    #[must_use]
    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// Authenticates for the tenant named by `host`; the token is stored by
    /// the client and the screen moves to the success page.
    ///
    /// # Errors
    /// Returns [`ScreenError::Invalid`] for missing input and
    /// [`ScreenError::Rejected`] with [`LOGIN_FAILED_MESSAGE`] for any
    /// authentication failure.
    pub async fn submit(&self, host: &str, form: LoginForm) -> Result<Navigation, ScreenError> {
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

        self.lifetime
            .run(
                async {
                    self.client
                        .authenticate(&email, &form.password, &tenant)
                        .await
                        .map_err(|_| ScreenError::Rejected(LOGIN_FAILED_MESSAGE.to_string()))?;
                    Ok(Navigation::to(Route::Success))
                },
                |navigation| ScreenState::Navigated(navigation.route),
            )
            .await
    }
}
