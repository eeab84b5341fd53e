mod auth;
mod chat;
mod client;
pub mod models;

pub use auth::{AuthApi, HttpAuthApi, LOGIN_PATH, REGISTRATION_PATH};
pub use chat::{ChatApi, HttpChatApi, CHAT_PATH};
pub use client::{
    ApiClient, ALERT_INTERNAL_SERVER_ERROR, ALERT_SERVER_UNREACHABLE, REQUEST_TIMEOUT_MS,
};
