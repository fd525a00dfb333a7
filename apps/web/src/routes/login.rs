use crate::{
    components::{Alert, AlertKind, AppShell, Button, TextField},
    features::auth::{
        client::{current_host, identity_client, screen_lifetime, use_config},
        navigation::{navigate_options, pending_registration},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use secrecy::SecretString;
use tenantgate::{
    Route, ScreenError,
    screens::{LoginForm, LoginScreen},
};

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let lifetime = screen_lifetime();
    let navigate = use_navigate();
    let email = RwSignal::new(
        pending_registration()
            .map(|pending| pending.email)
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<ScreenError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        let config = config.clone();
        let lifetime = lifetime.clone();
        async move {
            let screen = LoginScreen::new(identity_client(&config)?, lifetime);
            let form = LoginForm {
                email: input.email,
                password: SecretString::from(input.password),
            };
            screen.submit(&current_host(), form).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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
        login_action.dispatch(LoginInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell title="Login">
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
                    autocomplete="current-password"
                    value=password
                />
                <Button button_type="submit" pending=login_action.pending()>
                    "Login"
                </Button>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>
            <p class="mt-6 text-sm text-slate-500">
                "No account yet? "
                <A href=Route::SignUp.path() {..} class="font-medium text-slate-900 underline">
                    "Sign up"
                </A>
            </p>
        </AppShell>
    }
}
