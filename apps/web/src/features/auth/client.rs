use super::storage::LocalTokenStore;
use crate::app_lib::config::AppConfig;
use leptos::prelude::*;
use tenantgate::{CognitoClient, IdentityClient, ScreenError, ScreenLifetime};
use tracing::error;

pub(crate) type WebClient = IdentityClient<CognitoClient, LocalTokenStore>;

/// Config provided by `App`, or a fresh load when rendered outside it.
pub(crate) fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

pub(crate) fn identity_client(config: &AppConfig) -> Result<WebClient, ScreenError> {
    CognitoClient::new(&config.identity())
        .map(|provider| IdentityClient::new(provider, LocalTokenStore))
        .map_err(|err| {
            error!("identity client unavailable: {err}");
            ScreenError::from_provider(&err)
        })
}

/// Lifetime of the current page. Unmounting the page aborts its request.
pub(crate) fn screen_lifetime() -> ScreenLifetime {
    let lifetime = ScreenLifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.close());
    lifetime
}

/// Hostname of the page, which names the tenant.
pub(crate) fn current_host() -> String {
    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default()
}
