//! Carries [`PendingRegistration`] between pages in browser history state.
//! History state survives back/forward but not a fresh page load.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_location, location::State};
use tenantgate::{Navigation, PendingRegistration};
use tracing::warn;
use wasm_bindgen::JsValue;

pub(crate) fn navigate_options(navigation: &Navigation) -> NavigateOptions {
    let state = navigation.state.as_ref().and_then(|pending| {
        pending
            .to_state()
            .inspect_err(|err| warn!("dropping navigation state: {err}"))
            .ok()
    });

    NavigateOptions {
        state: State::new(state.map(|json| JsValue::from_str(&json))),
        ..Default::default()
    }
}

/// Context handed over by the previous page, if any.
pub(crate) fn pending_registration() -> Option<PendingRegistration> {
    use_location()
        .state
        .get_untracked()
        .to_js_value()
        .as_string()
        .and_then(|state| PendingRegistration::from_state(&state))
}
