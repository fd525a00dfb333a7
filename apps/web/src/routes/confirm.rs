use crate::{
    components::{Alert, AlertKind, AppShell, Button, TextField},
    features::auth::{
        client::{identity_client, screen_lifetime, use_config},
        navigation::{navigate_options, pending_registration},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;
use tenantgate::{PendingRegistration, ScreenError, screens::ConfirmSignUpScreen};

#[derive(Clone)]
struct ConfirmInput {
    email: String,
    code: String,
}

/// Confirmation page. The email arrives in history state from sign-up; after
/// a reload it is typed again. Any tenant received is passed on untouched.
#[component]
pub fn ConfirmSignUpPage() -> impl IntoView {
    let config = use_config();
    let lifetime = screen_lifetime();
    let navigate = use_navigate();
    let pending = pending_registration().unwrap_or_default();
    let tenant_id = pending.tenant_id.clone();
    let email = RwSignal::new(pending.email);
    let code = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<ScreenError>>(None);
    let (resent, set_resent) = signal(false);

    let confirm_action = {
        let config = config.clone();
        let lifetime = lifetime.clone();
        Action::new_local(move |input: &ConfirmInput| {
            let pending = PendingRegistration {
                email: input.email.clone(),
                tenant_id: tenant_id.clone(),
            };
            let code = input.code.clone();
            let config = config.clone();
            let lifetime = lifetime.clone();
            async move {
                ConfirmSignUpScreen::new(identity_client(&config)?, lifetime)
                    .submit(pending, &code)
                    .await
            }
        })
    };

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        let config = config.clone();
        let lifetime = lifetime.clone();
        async move {
            ConfirmSignUpScreen::new(identity_client(&config)?, lifetime)
                .resend_code(&email)
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = confirm_action.value().get() {
            match result {
                Ok(navigation) => {
                    navigate(navigation.route.path(), navigate_options(&navigation));
                }
                Err(ScreenError::Cancelled) => {}
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => set_resent.set(true),
                Err(ScreenError::Cancelled) => {}
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_resent.set(false);
        confirm_action.dispatch(ConfirmInput {
            email: email.get_untracked(),
            code: code.get_untracked(),
        });
    };

    let on_resend = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_resent.set(false);
        resend_action.dispatch(email.get_untracked());
    };

    let busy = Signal::derive(move || confirm_action.pending().get() || resend_action.pending().get());

    view! {
        <AppShell title="Confirm Sign Up">
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
                    id="code"
                    label="Verification Code"
                    autocomplete="one-time-code"
                    inputmode="numeric"
                    value=code
                />
                <Button button_type="submit" pending=busy>
                    "Confirm"
                </Button>
            </form>
            <form class="mt-4" on:submit=on_resend>
                <button
                    type="submit"
                    class="text-sm font-medium text-slate-600 underline hover:text-slate-900"
                    disabled=move || busy.get()
                >
                    "Send a new code"
                </button>
            </form>
            {move || {
                resent
                    .get()
                    .then(|| view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Success message="A new code is on its way." />
                        </div>
                    })
            }}
            {move || {
                error
                    .get()
                    .map(|err| view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        </div>
                    })
            }}
        </AppShell>
    }
}
