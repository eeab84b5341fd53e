use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

use crate::api::AuthApi;
use crate::error::Result;
use crate::storage::TokenStore;

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<Value>,
}

/// Auth session state. The token is the sole authority for
/// `is_authenticated`; durable storage is read once at construction so a
/// session survives restarts.
pub struct AuthStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn TokenStore>,
    state: Mutex<SessionState>,
}

impl AuthStore {
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn TokenStore>) -> Self {
        let state = SessionState {
            token: storage.load_token(),
            user: storage.load_user(),
        };
        AuthStore {
            api,
            storage,
            state: Mutex::new(state),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }

    pub fn user(&self) -> Option<Value> {
        self.state.lock().user.clone()
    }

    /// Exchange credentials for a token, keep it in memory and persist it.
    /// On failure the session is left untouched and the error propagates
    /// so the login screen can render it.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let token = self.api.login(username, password).await?;
        self.state.lock().token = Some(token.clone());
        self.storage.save_token(&token)?;
        Ok(())
    }

    /// Create the account, then establish a session by logging in with the
    /// same credentials. Registration alone does not log the user in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<()> {
        self.api.register(username, password, password_confirm).await?;
        self.login(username, password).await
    }

    /// Drop the session in memory and in durable storage. No backend call;
    /// server-side token revocation is deliberately left out.
    pub fn logout(&self) {
        let mut state = self.state.lock();
        state.token = None;
        state.user = None;
        drop(state);

        let _ = self.storage.clear_token();
        let _ = self.storage.clear_user();
    }
}
