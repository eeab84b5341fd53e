use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry in a drawer conversation. `is_new` is a transient UI hint:
/// true only for the latest model reply, to trigger the typing effect.
/// It never travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing)]
    pub is_new: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
            is_new: false,
        }
    }

    pub fn model(content: impl Into<String>, is_new: bool) -> Self {
        Message {
            role: Role::Model,
            content: content.into(),
            is_new,
        }
    }
}

/// Lightweight entry in the "all sessions" listing. The backend keys a
/// session by its image URL; `messages` are not included here.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
