use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;
use tenantgate::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell title="Page not found">
            <p class="text-sm text-slate-500">
                "There is nothing at this address."
            </p>
            <A
                href=Route::SignUp.path()
                {..}
                class="mt-6 inline-flex items-center rounded-lg border border-slate-200 px-5 py-2.5 text-sm font-medium text-slate-900 hover:bg-slate-100"
            >
                "Create an account"
            </A>
        </AppShell>
    }
}
