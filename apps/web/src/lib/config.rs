//! Identity provider settings baked in at build time with an optional runtime
//! override. The override is read from `window.TENANTGATE_CONFIG` (if present)
//! so one static bundle can be pointed at another user pool without a rebuild.
//! Native builds read the same override from the `TENANTGATE_*` environment.
//! Every value here is public; do not store secrets.

use tenantgate::IdentityConfig;

const DEFAULT_USER_POOL_ID: &str = "us-east-2_3NUtAHXmB";
const DEFAULT_CLIENT_ID: &str = "6j8660ir99eu0afl3n0o52am7";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub user_pool_id: String,
    pub client_id: String,
    pub endpoint: Option<String>,
}

impl AppConfig {
    /// Reads `TENANTGATE_*` build-time variables, then applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            user_pool_id: option_env!("TENANTGATE_USER_POOL_ID")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_USER_POOL_ID.to_string()),
            client_id: option_env!("TENANTGATE_CLIENT_ID")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
            endpoint: option_env!("TENANTGATE_ENDPOINT").and_then(normalize_runtime_value),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    pub fn identity(&self) -> IdentityConfig {
        let config = IdentityConfig::new(&self.user_pool_id, &self.client_id);
        match &self.endpoint {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    user_pool_id: Option<String>,
    client_id: Option<String>,
    endpoint: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.user_pool_id {
        config.user_pool_id = value;
    }
    if let Some(value) = runtime.client_id {
        config.client_id = value;
    }
    if runtime.endpoint.is_some() {
        config.endpoint = runtime.endpoint;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("TENANTGATE_CONFIG")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let object = Object::from(value);

    Some(RuntimeConfig {
        user_pool_id: read_runtime_value(&object, "user_pool_id"),
        client_id: read_runtime_value(&object, "client_id"),
        endpoint: read_runtime_value(&object, "endpoint"),
    })
}

/// Native builds (tests, local tooling) take the override from the
/// `TENANTGATE_*` process environment instead of the window object.
#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    let config = IdentityConfig::from_env().ok()?;
    Some(RuntimeConfig {
        user_pool_id: Some(config.user_pool_id),
        client_id: Some(config.client_id),
        endpoint: config.endpoint,
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
