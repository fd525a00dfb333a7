//! Page chrome shared by every route.

mod app_shell;

pub(crate) use app_shell::AppShell;
