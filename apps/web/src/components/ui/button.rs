use super::Spinner;
use leptos::prelude::*;

/// Full-width form button. While `pending` it is disabled and shows a spinner
/// next to its label.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class="inline-flex w-full items-center justify-center gap-2 rounded-lg bg-slate-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-slate-700 focus:outline-none focus:ring-4 focus:ring-slate-300"
            class:cursor-not-allowed=move || pending.get()
            class:opacity-70=move || pending.get()
            disabled=move || pending.get()
            aria-busy=move || pending.get().to_string()
        >
            {move || pending.get().then(|| view! { <Spinner /> })}
            {children()}
        </button>
    }
}
