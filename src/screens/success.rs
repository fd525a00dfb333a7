use super::{ScreenError, ScreenLifetime, ScreenState};
use crate::{client::IdentityClient, provider::IdentityProvider, storage::TokenStore};
use tracing::error;

/// Terminal screen. It only recovers the username from the stored session.
pub struct SuccessScreen<P, S> {
    client: IdentityClient<P, S>,
    lifetime: ScreenLifetime,
}

impl<P: IdentityProvider, S: TokenStore> SuccessScreen<P, S> {
    #[must_use]
    pub fn new(client: IdentityClient<P, S>, lifetime: ScreenLifetime) -> Self {
        Self { client, lifetime }
    }

    /// Username of the current session, or `None` when there is no usable
    /// session. Retrieval errors are logged and read as `None`.
    ///
    /// # Errors
    /// Returns [`ScreenError::Cancelled`] if the screen closed first.
    pub async fn load(&self) -> Result<Option<String>, ScreenError> {
        self.lifetime
            .run(
                async {
                    match self.client.current_session().await {
                        Ok(user) => Ok(user.map(|user| user.username)),
                        Err(err) => {
                            error!("unable to restore session: {err}");
                            Ok(None)
                        }
                    }
                },
                |_| ScreenState::Idle,
            )
            .await
    }
}
