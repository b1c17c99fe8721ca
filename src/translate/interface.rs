use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Inbound body of `POST /translate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: Option<String>,
    /// "arabic" (default) or "latin"
    pub script: Option<String>,
    pub temperature: Option<f64>,
    /// Accepted for compatibility, never used
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResponse {
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Strips leading and trailing control characters and ASCII spaces (code points up to U+0020).
/// Other Unicode spaces such as U+00A0 are kept as content.
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Writing system used for the Darija output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Script {
    #[default]
    Arabic,
    Latin,
}

impl Script {
    /// Anything that is not "latin"/"latn" falls back to Arabic script.
    pub fn normalize(script: Option<&str>) -> Self {
        match script.map(|s| trim_blank(s).to_lowercase()).as_deref() {
            Some("latin") | Some("latn") => Script::Latin,
            _ => Script::Arabic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Arabic => "arabic",
            Script::Latin => "latin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatOptions {
    pub temperature: f64,
}

/// Body expected by the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

/// Chat completion backend.
/// Returns the assistant reply, already trimmed and guaranteed non-empty.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<String, TranslateError>;

    /// Whether the backend is currently reachable
    async fn health_check(&self) -> bool {
        true
    }
}
