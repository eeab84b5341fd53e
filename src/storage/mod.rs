mod filesystem;
mod memory;

pub use filesystem::FilesystemTokenStore;
pub use memory::MemoryTokenStore;

use serde_json::Value;

use crate::error::Result;

/// Durable client-side storage for the auth session, the stand-in for the
/// browser's localStorage. Two keys: the token string and an optional
/// user profile object.
pub trait TokenStore: Send + Sync {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;

    fn load_user(&self) -> Option<Value>;
    fn save_user(&self, user: &Value) -> Result<()>;
    fn clear_user(&self) -> Result<()>;
}
