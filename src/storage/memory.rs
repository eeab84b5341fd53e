use parking_lot::Mutex;
use serde_json::Value;

use super::TokenStore;
use crate::error::Result;

/// In-memory token storage, for tests and one-off runs that should not
/// touch the filesystem.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    user: Mutex<Option<Value>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token, emulating a previous session.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.lock() = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load_token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn save_token(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }

    fn load_user(&self) -> Option<Value> {
        self.user.lock().clone()
    }

    fn save_user(&self, user: &Value) -> Result<()> {
        *self.user.lock() = Some(user.clone());
        Ok(())
    }

    fn clear_user(&self) -> Result<()> {
        *self.user.lock() = None;
        Ok(())
    }
}
