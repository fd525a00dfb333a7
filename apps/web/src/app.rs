use crate::app_lib::config::AppConfig;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. The identity config is loaded once and shared through
/// context; each screen builds its own client from it.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    view! {
        <Router>
            <AppRoutes />
        </Router>
    }
}
