//! Browser glue between the Leptos pages and the `tenantgate` screens.

pub(crate) mod auth;
