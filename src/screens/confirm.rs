use super::{ScreenError, ScreenLifetime, ScreenState, required_email};
use crate::{
    client::IdentityClient,
    provider::IdentityProvider,
    routes::{Navigation, PendingRegistration, Route},
    storage::TokenStore,
};

/// Activates a pending account with the emailed code and hands the
/// registration context on to the login screen.
pub struct ConfirmSignUpScreen<P, S> {
    client: IdentityClient<P, S>,
    lifetime: ScreenLifetime,
}

impl<P: IdentityProvider, S: TokenStore> ConfirmSignUpScreen<P, S> {
    #[must_use]
    pub fn new(client: IdentityClient<P, S>, lifetime: ScreenLifetime) -> Self {
        Self { client, lifetime }
    }

    #[must_use]
    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// Confirms `pending.email` with `code`. On success navigates to login
    /// with `pending` unchanged.
    ///
    /// # Errors
    /// Returns [`ScreenError::Invalid`] for a missing email or code and
    /// [`ScreenError::Rejected`] with the provider's message for a bad or
    /// expired code.
    pub async fn submit(
        &self,
        pending: PendingRegistration,
        code: &str,
    ) -> Result<Navigation, ScreenError> {
        let email = match required_email(&pending.email) {
            Ok(email) => email,
            Err(err) => return self.lifetime.reject(err),
        };
        let code = code.trim();
        if code.is_empty() {
            return self.lifetime.reject(ScreenError::Invalid(
                "Verification code is required.".to_string(),
            ));
        }

        self.lifetime
            .run(
                async {
                    self.client
                        .confirm_registration(&email, code)
                        .await
                        .map_err(|err| ScreenError::from_provider(&err))?;
                    Ok(Navigation::with_state(
                        Route::Login,
                        PendingRegistration {
                            email: email.clone(),
                            tenant_id: pending.tenant_id.clone(),
                        },
                    ))
                },
                |navigation| ScreenState::Navigated(navigation.route),
            )
            .await
    }

    /// Asks the provider to send a new code to `email`. Stays on the screen.
    ///
    /// # Errors
    /// Returns [`ScreenError::Invalid`] for a malformed email and
    /// [`ScreenError::Rejected`] with the provider's message otherwise.
    pub async fn resend_code(&self, email: &str) -> Result<(), ScreenError> {
        let email = match required_email(email) {
            Ok(email) => email,
            Err(err) => return self.lifetime.reject(err),
        };

        self.lifetime
            .run(
                async {
                    self.client
                        .resend_confirmation_code(&email)
                        .await
                        .map_err(|err| ScreenError::from_provider(&err))
                },
                |_| ScreenState::Idle,
            )
            .await
    }
}
