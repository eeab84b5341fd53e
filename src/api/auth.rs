use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::Result;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTRATION_PATH: &str = "/api/auth/registration/";

/// Authentication backend operations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session token.
    async fn login(&self, username: &str, password: &str) -> Result<String>;

    /// Create an account. Does not establish a session; callers log in
    /// afterwards.
    async fn register(&self, username: &str, password: &str, password_confirm: &str)
        -> Result<()>;
}

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        HttpAuthApi { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response: LoginResponse = self
            .client
            .post_json(
                LOGIN_PATH,
                &LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        Ok(response.key)
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<()> {
        self.client
            .post_unit(
                REGISTRATION_PATH,
                &RegisterRequest {
                    username: username.to_string(),
                    password1: password.to_string(),
                    password2: password_confirm.to_string(),
                },
            )
            .await
    }
}
