//! `localStorage` token slot. Reads and writes go straight to the browser;
//! nothing is cached in memory.

use tenantgate::{Error, Result, TokenStore};
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalTokenStore;

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
        .ok_or_else(|| Error::Storage("localStorage is unavailable".to_string()))
}

impl TokenStore for LocalTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|_| Error::Storage(format!("unable to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| Error::Storage(format!("unable to write {key}")))
    }
}
