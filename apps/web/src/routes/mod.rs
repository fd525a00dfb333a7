mod confirm;
mod login;
mod not_found;
mod signup;
mod success;

pub(crate) use confirm::ConfirmSignUpPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;
pub(crate) use success::SuccessPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Paths mirror `tenantgate::Route::path`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=SignUpPage />
            <Route path=path!("/confirm") view=ConfirmSignUpPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/success") view=SuccessPage />
        </Routes>
    }
}
