use serde::{Deserialize, Serialize};

use crate::models::Message;

#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    /// The session token issued by the backend.
    pub key: String,
}

/// dj-rest-auth wants both password fields on registration.
#[derive(Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Serialize)]
pub struct AskRequest {
    pub image_url: String,
    pub prompt: String,
}

#[derive(Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// History payload for one image. Extra session fields (id, created_at)
/// are ignored; only the message list is used.
#[derive(Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Serialize)]
pub struct ClearRequest {
    pub image_url: String,
}
