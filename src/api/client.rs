use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{PawChatError, Result};
use crate::ui::AlertSink;

/// Every request is cut off after 10 seconds.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const ALERT_SERVER_UNREACHABLE: &str = "無法連線至伺服器，請檢查後端是否已啟動。";
pub const ALERT_INTERNAL_SERVER_ERROR: &str = "伺服器發生內部錯誤，請聯絡管理員。";

/// Shape of the backend's error payload.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client with a fixed base URL, JSON defaults, and global error
/// handling shared by every endpoint.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    alerts: Arc<dyn AlertSink>,
}

impl ApiClient {
    pub fn new(base_url: &str, alerts: Arc<dyn AlertSink>) -> Result<Self> {
        Self::with_timeout(
            base_url,
            alerts,
            Duration::from_millis(REQUEST_TIMEOUT_MS),
        )
    }

    /// Build with an explicit timeout. `new` applies the standard cutoff.
    pub fn with_timeout(
        base_url: &str,
        alerts: Arc<dyn AlertSink>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            alerts,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .execute(self.http.get(self.url(path)).query(params))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.execute(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST where the caller only cares about success.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// DELETE with a JSON body, used to scope the deletion to one session.
    pub async fn delete_with_body<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.http.delete(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// Central response handling. Successful responses pass through
    /// untouched. Transport failures and HTTP 500 additionally fire a
    /// blocking alert; the error is always returned to the caller so
    /// per-feature handling still runs.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return Err(PawChatError::Timeout),
            // A request that cannot even be built (e.g. a relative URL from
            // a missing base URL) is a configuration problem, not a server
            // outage.
            Err(err) if err.is_builder() => {
                return Err(PawChatError::ConfigError(format!(
                    "invalid request URL: {}",
                    err
                )))
            }
            Err(err) => {
                self.alerts.alert(ALERT_SERVER_UNREACHABLE);
                return Err(PawChatError::NetworkError(err));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let server_message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.error);

        if status.as_u16() == 500 {
            self.alerts.alert(ALERT_INTERNAL_SERVER_ERROR);
        }

        Err(PawChatError::ApiError {
            status: status.as_u16(),
            server_message,
        })
    }
}
