//! The persisted (token, user) pair.
//!
//! Both keys are always written or removed in one batch so the token and
//! the user can never disagree.

use crate::{ApiResult, FileStore, KeyValueStore, MemoryStore};

use bb_core::User;

use std::path::PathBuf;
use std::sync::Arc;

use log::warn;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "billbharat_auth_token";
/// Storage key of the serialized current user
pub const USER_KEY: &str = "billbharat_user";

#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStore::new(path)))
    }

    /// The underlying key-value store
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn token(&self) -> ApiResult<Option<String>> {
        Ok(self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// The persisted user; an unreadable entry counts as no user.
    pub fn user(&self) -> ApiResult<Option<User>> {
        let Some(raw) = self.store.get(USER_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable persisted user: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save(&self, token: &str, user: &User) -> ApiResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.store.write_batch(&[
            (TOKEN_KEY, Some(token.to_string())),
            (USER_KEY, Some(user_json)),
        ])
    }

    pub fn clear(&self) -> ApiResult<()> {
        self.store
            .write_batch(&[(TOKEN_KEY, None), (USER_KEY, None)])
    }
}
