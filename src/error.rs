use std::fmt;

#[derive(Debug)]
pub enum PawChatError {
    /// Non-2xx HTTP response. `server_message` carries the backend's
    /// `{"error": "..."}` payload when one was present.
    ApiError {
        status: u16,
        server_message: Option<String>,
    },
    ConfigError(String),
    StorageError(String),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl PawChatError {
    /// Server-supplied error message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            PawChatError::ApiError { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }

    /// User-facing error string: prefer the backend's message, otherwise
    /// fall back to the operation-specific wording.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(|m| m.to_string())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for PawChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PawChatError::ApiError {
                status,
                server_message,
            } => match server_message {
                Some(msg) => write!(f, "API error (status {}): {}", status, msg),
                None => write!(f, "API error (status {})", status),
            },
            PawChatError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PawChatError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            PawChatError::NetworkError(e) => write!(f, "Network error: {}", e),
            PawChatError::Timeout => write!(f, "Request timeout"),
            PawChatError::IoError(e) => write!(f, "IO error: {}", e),
            PawChatError::JsonError(e) => write!(f, "JSON error: {}", e),
            PawChatError::YamlError(e) => write!(f, "YAML error: {}", e),
            PawChatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PawChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PawChatError::NetworkError(e) => Some(e),
            PawChatError::IoError(e) => Some(e),
            PawChatError::JsonError(e) => Some(e),
            PawChatError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PawChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PawChatError::Timeout
        } else {
            PawChatError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for PawChatError {
    fn from(err: std::io::Error) -> Self {
        PawChatError::IoError(err)
    }
}

impl From<serde_json::Error> for PawChatError {
    fn from(err: serde_json::Error) -> Self {
        PawChatError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for PawChatError {
    fn from(err: serde_yaml::Error) -> Self {
        PawChatError::YamlError(err)
    }
}

impl From<String> for PawChatError {
    fn from(msg: String) -> Self {
        PawChatError::Other(msg)
    }
}

impl From<&str> for PawChatError {
    fn from(msg: &str) -> Self {
        PawChatError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PawChatError>;
