//! Session key-value store.
//!
//! String keys to string values, like browser local storage. The current
//! user lives under [`CURRENT_USER_KEY`] as JSON.

use std::collections::HashMap;

use billed_core::user::{CurrentUser, CURRENT_USER_KEY};
use tokio::sync::RwLock;

use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct SessionStore {
    items: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().await.get(key).cloned()
    }

    pub async fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.write().await.insert(key.into(), value.into());
    }

    pub async fn remove_item(&self, key: &str) {
        self.items.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// The stored current user, if any.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, StoreError> {
        match self.get_item(CURRENT_USER_KEY).await {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored current user.
    pub async fn set_current_user(&self, user: &CurrentUser) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.set_item(CURRENT_USER_KEY, raw).await;
        Ok(())
    }
}
