//! Sign-up page. The tenant comes from the page host, never from the form; on
//! success the email is handed to the confirmation page through history state.

use crate::{
    components::{Alert, AlertKind, AppShell, Button, TextField},
    features::auth::{
        client::{current_host, identity_client, screen_lifetime, use_config},
        navigation::navigate_options,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use secrecy::SecretString;
use tenantgate::{
    Route, ScreenError,
    screens::{SignUpForm, SignUpScreen},
};

/// Owned copy of the form for the async action.
#[derive(Clone)]
struct SignupInput {
    email: String,
    password: String,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = use_config();
    let lifetime = screen_lifetime();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<ScreenError>>(None);

    let signup_action = Action::new_local(move |input: &SignupInput| {
        let input = input.clone();
        let config = config.clone();
        let lifetime = lifetime.clone();
        async move {
            let screen = SignUpScreen::new(identity_client(&config)?, lifetime);
            let form = SignUpForm {
                email: input.email,
                password: SecretString::from(input.password),
            };
            screen.submit(&current_host(), form).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(navigation) => {
                    navigate(navigation.route.path(), navigate_options(&navigation));
                }
                Err(ScreenError::Cancelled) => {}
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        signup_action.dispatch(SignupInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell title="Sign Up">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    inputmode="email"
                    value=email
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                />
                <Button button_type="submit" pending=signup_action.pending()>
                    "Sign Up"
                </Button>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>
            <p class="mt-6 text-sm text-slate-500">
                "Already registered? "
                <A href=Route::Login.path() {..} class="font-medium text-slate-900 underline">
                    "Sign in"
                </A>
            </p>
        </AppShell>
    }
}
