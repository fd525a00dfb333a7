//! Centered card layout with a minimal header and a build footer. Links are
//! client-side only; the identity provider enforces every rule.

use crate::app_lib::build_info::git_commit_hash;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use tenantgate::Route;

/// Nav link marked with `aria-current` while its route is showing.
#[component]
fn NavLink(route: Route, label: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;
    let current = move || Route::from_path(&pathname.get()) == Some(route);

    view! {
        <A
            href=route.path()
            {..}
            class="hover:text-slate-900"
            class:font-semibold=current
            class:text-slate-900=current
            aria-current=move || current().then_some("page")
        >
            {label}
        </A>
    }
}

#[component]
pub fn AppShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <nav class="mx-auto flex max-w-screen-md items-center justify-between p-4">
                    <A href=Route::SignUp.path() {..} class="font-semibold text-slate-900">
                        "Tenantgate"
                    </A>
                    <div class="flex gap-6 text-sm text-slate-600">
                        <NavLink route=Route::SignUp label="Sign Up" />
                        <NavLink route=Route::Login label="Sign In" />
                    </div>
                </nav>
            </header>
            <main class="flex flex-1 items-center justify-center px-6 py-10">
                <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8">
                    <h1 class="mb-6 text-2xl font-semibold text-slate-900">{title}</h1>
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-slate-400">
                "build " {git_commit_hash()}
            </footer>
        </div>
    }
}
