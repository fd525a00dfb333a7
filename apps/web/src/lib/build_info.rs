/// Commit the bundle was built from, stamped by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    match option_env!("TENANTGATE_WEB_GIT_SHA") {
        Some(value) if !value.trim().is_empty() => value,
        _ => "unknown",
    }
}
