//! Route table and the context threaded between screens through navigation
//! state. Navigation state lives in browser history only and is lost on reload.

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    SignUp,
    Confirm,
    Login,
    Success,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::SignUp, Route::Confirm, Route::Login, Route::Success];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::SignUp => "/",
            Route::Confirm => "/confirm",
            Route::Login => "/login",
            Route::Success => "/success",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// `{email, tenantId}` carried from sign-up to confirmation and on to login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRegistration {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl PendingRegistration {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            tenant_id: None,
        }
    }

    /// Encodes the context for the router's history state.
    ///
    /// # Errors
    /// Returns [`crate::Error::Json`] if serialization fails.
    pub fn to_state(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes history state; anything unreadable is treated as absent.
    #[must_use]
    pub fn from_state(state: &str) -> Option<Self> {
        serde_json::from_str(state).ok()
    }
}

/// Outcome of a successful screen submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub state: Option<PendingRegistration>,
}

impl Navigation {
    #[must_use]
    pub fn to(route: Route) -> Self {
        Self { route, state: None }
    }

    #[must_use]
    pub fn with_state(route: Route, state: PendingRegistration) -> Self {
        Self {
            route,
            state: Some(state),
        }
    }
}
