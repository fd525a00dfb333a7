//! Persistent key/value slot for the bearer token. The browser implementation
//! lives in the web app (`localStorage`); [`MemoryTokenStore`] backs tests and
//! native callers.

use crate::error::Result;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Storage key holding the access token issued on login.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

pub trait TokenStore {
    /// # Errors
    /// Returns [`crate::Error::Storage`] if the backend is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    /// Returns [`crate::Error::Storage`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slots: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every slot, for assertions.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
