//! Tenant-aware sign-up and login flow over a managed identity provider.
//!
//! ## Flow Overview
//!
//! 1. **Sign up:** the tenant id is taken from the left-most label of the page
//!    host and sent with the registration, both as the `custom:tenantId` user
//!    attribute and as client metadata.
//! 2. **Confirm:** the user submits the one-time code delivered by the provider.
//! 3. **Login:** credentials are sent with the tenant id as client metadata so
//!    the provider can validate the tenant server-side. The access token is
//!    kept in browser storage under [`storage::ACCESS_TOKEN_KEY`].
//! 4. **Success:** the stored token is validated with the provider to recover
//!    the signed-in username.
//!
//! The provider is the system of record for accounts and credentials. This
//! crate never logs passwords, codes, or tokens.

pub mod client;
pub mod cognito;
pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod screens;
pub mod storage;
pub mod tenant;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::IdentityClient;
pub use cognito::CognitoClient;
pub use config::IdentityConfig;
pub use error::{Error, Result};
pub use provider::{AuthSession, CurrentUser, IdentityProvider, SignUpOutcome, SignUpRequest};
pub use routes::{Navigation, PendingRegistration, Route};
pub use screens::{ScreenError, ScreenLifetime, ScreenState};
pub use storage::{MemoryTokenStore, TokenStore};
pub use tenant::{TenantId, tenant_label};

/// User agent sent by native HTTP clients.
pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
