//! Inline banners for form feedback. Messages come from `ScreenError` or fixed
//! copy and never contain tokens or codes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let (class, role) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            "alert",
        ),
        AlertKind::Success => (
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700",
            "status",
        ),
    };

    view! { <div class=class role=role>{message}</div> }
}
