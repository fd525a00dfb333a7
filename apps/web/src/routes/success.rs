use crate::{
    components::AppShell,
    features::auth::client::{identity_client, screen_lifetime, use_config},
};
use leptos::{prelude::*, task::spawn_local};
use tenantgate::screens::SuccessScreen;
use tracing::debug;

/// Terminal page. Greets the user when the stored token still resolves to an
/// account; otherwise only the heading is shown.
#[component]
pub fn SuccessPage() -> impl IntoView {
    let config = use_config();
    let lifetime = screen_lifetime();
    let (username, set_username) = signal::<Option<String>>(None);

    spawn_local(async move {
        let Ok(client) = identity_client(&config) else {
            return;
        };
        match SuccessScreen::new(client, lifetime).load().await {
            Ok(user) => set_username.set(user),
            Err(err) => debug!("session lookup skipped: {err}"),
        }
    });

    view! {
        <AppShell title="Login Successful!">
            {move || {
                username
                    .get()
                    .map(|name| view! { <p class="text-slate-700">"Welcome, " {name}</p> })
            }}
        </AppShell>
    }
}
