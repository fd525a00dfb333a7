//! Screen controllers for the four pages. Each screen is a small state machine:
//! `Idle -> Submitting` on submit, then `Failed` or `Navigated`. A screen owns a
//! [`ScreenLifetime`] that allows one outstanding provider call at a time and
//! aborts it when the screen goes away, so late results never reach a view
//! that is no longer mounted.

mod confirm;
mod login;
mod signup;
mod success;

pub use confirm::ConfirmSignUpScreen;
pub use login::{LOGIN_FAILED_MESSAGE, LoginForm, LoginScreen};
pub use signup::{SignUpForm, SignUpScreen};
pub use success::SuccessScreen;

use crate::{error::Error, routes::Route};
use futures::future::{AbortHandle, Abortable};
use regex::Regex;
use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Submitting,
    Failed(ScreenError),
    Navigated(Route),
}

/// User-facing failure of a screen submission. Messages are safe to render.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    /// Input rejected before contacting the provider.
    #[error("{0}")]
    Invalid(String),
    /// Provider refused the request.
    #[error("{0}")]
    Rejected(String),
    #[error("A request is already in progress.")]
    Busy,
    /// The screen was closed while the request was in flight.
    #[error("Request cancelled.")]
    Cancelled,
}

impl ScreenError {
    /// Provider messages pass through; transport and parsing failures get a
    /// generic message.
    #[must_use]
    pub fn from_provider(err: &Error) -> Self {
        match err {
            Error::Provider { message, .. } if !message.trim().is_empty() => {
                Self::Rejected(message.clone())
            }
            Error::Provider { code, .. } => Self::Rejected(code.clone()),
            Error::ChallengeRequired(_) => Self::Rejected(
                "Additional verification is required for this account.".to_string(),
            ),
            Error::InvalidHost(_) => Self::Invalid(
                "Unable to determine your organization from this address.".to_string(),
            ),
            Error::Transport(_) => {
                Self::Rejected("Unable to reach the identity service. Please try again.".to_string())
            }
            Error::Response(_) | Error::Json(_) | Error::Config(_) | Error::Storage(_) => {
                Self::Rejected("Something went wrong. Please try again.".to_string())
            }
        }
    }
}

#[derive(Debug)]
struct Lifetime {
    state: ScreenState,
    in_flight: Option<AbortHandle>,
    closed: bool,
}

/// Tracks one screen's state and its in-flight request. Clones share state, so
/// the view can hold one copy for cleanup while a submission holds another.
#[derive(Clone, Debug)]
pub struct ScreenLifetime {
    inner: Arc<Mutex<Lifetime>>,
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Lifetime {
                state: ScreenState::Idle,
                in_flight: None,
                closed: false,
            })),
        }
    }
}

impl ScreenLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ScreenState {
        self.lock().state.clone()
    }

    /// Marks the screen as gone and aborts the in-flight request, if any.
    pub fn close(&self) {
        let mut lifetime = self.lock();
        lifetime.closed = true;
        if let Some(handle) = lifetime.in_flight.take() {
            debug!("aborting in-flight request");
            handle.abort();
        }
    }

    /// Records an input error without leaving the current screen. A request
    /// already in flight keeps the screen busy.
    pub(crate) fn reject<T>(&self, err: ScreenError) -> Result<T, ScreenError> {
        let mut lifetime = self.lock();
        if lifetime.state == ScreenState::Submitting {
            return Err(ScreenError::Busy);
        }
        lifetime.state = ScreenState::Failed(err.clone());
        Err(err)
    }

    /// Runs `operation` as the single outstanding request of this screen.
    /// `settle` maps a successful result to the next state.
    pub(crate) async fn run<T, F>(
        &self,
        operation: F,
        settle: impl FnOnce(&T) -> ScreenState,
    ) -> Result<T, ScreenError>
    where
        F: Future<Output = Result<T, ScreenError>>,
    {
        let registration = {
            let mut lifetime = self.lock();
            if lifetime.closed {
                return Err(ScreenError::Cancelled);
            }
            if lifetime.state == ScreenState::Submitting {
                return Err(ScreenError::Busy);
            }
            let (handle, registration) = AbortHandle::new_pair();
            lifetime.state = ScreenState::Submitting;
            lifetime.in_flight = Some(handle);
            registration
        };

        let result = Abortable::new(operation, registration).await;

        let mut lifetime = self.lock();
        lifetime.in_flight = None;
        match result {
            Err(_aborted) => {
                lifetime.state = ScreenState::Idle;
                Err(ScreenError::Cancelled)
            }
            Ok(Ok(value)) => {
                lifetime.state = settle(&value);
                Ok(value)
            }
            Ok(Err(err)) => {
                lifetime.state = ScreenState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Lifetime> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// WHATWG "valid e-mail address", the check browsers apply to
/// `type="email"` inputs. Dot-less domains such as `localhost` pass.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

fn required_email(email: &str) -> Result<String, ScreenError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ScreenError::Invalid("Email is required.".to_string()));
    }
    if !valid_email(email) {
        return Err(ScreenError::Invalid(
            "Email address looks invalid.".to_string(),
        ));
    }
    Ok(email.to_string())
}
