use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::TokenStore;
use crate::error::Result;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// Token storage under `~/.cache/pawchat/`.
pub struct FilesystemTokenStore {
    root: Option<PathBuf>,
}

impl FilesystemTokenStore {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Store under an explicit directory instead of the user's cache dir.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn cache_dir(&self) -> PathBuf {
        let cache_dir = match &self.root {
            Some(root) => root.clone(),
            None => {
                let home = env::var("HOME").expect("HOME environment variable not set");
                Path::new(&home).join(".cache").join("pawchat")
            }
        };
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).expect("Failed to create cache directory");
        }
        cache_dir
    }
}

impl TokenStore for FilesystemTokenStore {
    fn load_token(&self) -> Option<String> {
        let token = fs::read_to_string(self.cache_dir().join(TOKEN_FILE)).ok()?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save_token(&self, token: &str) -> Result<()> {
        fs::write(self.cache_dir().join(TOKEN_FILE), token)?;
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let path = self.cache_dir().join(TOKEN_FILE);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn load_user(&self) -> Option<Value> {
        let content = fs::read_to_string(self.cache_dir().join(USER_FILE)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save_user(&self, user: &Value) -> Result<()> {
        let content = serde_json::to_string_pretty(user)?;
        fs::write(self.cache_dir().join(USER_FILE), content)?;
        Ok(())
    }

    fn clear_user(&self) -> Result<()> {
        let path = self.cache_dir().join(USER_FILE);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for FilesystemTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
