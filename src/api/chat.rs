use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::models::{AskRequest, AskResponse, ClearRequest, HistoryResponse};
use crate::error::Result;
use crate::models::{Message, SessionSummary};

/// Everything chat-related lives behind one resource path; the verb and
/// payload select the operation.
pub const CHAT_PATH: &str = "/api/chat/ask/";

/// Chat backend operations. Errors propagate untouched; the chat store
/// maps them to user-facing strings.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Conversation history for one image.
    async fn get_history(&self, image_url: &str) -> Result<Vec<Message>>;

    /// Submit a question about an image, returning the model's reply.
    async fn ask_question(&self, image_url: &str, prompt: &str) -> Result<String>;

    /// Erase the conversation for one image.
    async fn clear_history(&self, image_url: &str) -> Result<()>;

    /// All of the user's chat sessions, without their messages.
    async fn get_all_sessions(&self) -> Result<Vec<SessionSummary>>;

    /// Erase every chat session.
    async fn delete_all_sessions(&self) -> Result<()>;
}

pub struct HttpChatApi {
    client: ApiClient,
}

impl HttpChatApi {
    pub fn new(client: ApiClient) -> Self {
        HttpChatApi { client }
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn get_history(&self, image_url: &str) -> Result<Vec<Message>> {
        let history: HistoryResponse = self
            .client
            .get_json(CHAT_PATH, &[("image_url", image_url)])
            .await?;
        Ok(history.messages)
    }

    async fn ask_question(&self, image_url: &str, prompt: &str) -> Result<String> {
        let reply: AskResponse = self
            .client
            .post_json(
                CHAT_PATH,
                &AskRequest {
                    image_url: image_url.to_string(),
                    prompt: prompt.to_string(),
                },
            )
            .await?;
        Ok(reply.response)
    }

    async fn clear_history(&self, image_url: &str) -> Result<()> {
        self.client
            .delete_with_body(
                CHAT_PATH,
                &ClearRequest {
                    image_url: image_url.to_string(),
                },
            )
            .await
    }

    async fn get_all_sessions(&self) -> Result<Vec<SessionSummary>> {
        self.client.get_json(CHAT_PATH, &[]).await
    }

    async fn delete_all_sessions(&self) -> Result<()> {
        self.client.delete(CHAT_PATH).await
    }
}
