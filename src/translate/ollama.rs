use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::interface::{trim_blank, ChatBackend, ChatRequest};
use crate::config::TranslatorConfig;
use crate::error::TranslateError;

/// Client for Ollama's `/api/chat` endpoint
#[derive(Debug, Clone)]
pub struct OllamaChatClient {
    client: Client,
    chat_url: String,
    health_timeout: Duration,
}

impl OllamaChatClient {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Initialized OllamaChatClient: chat_url={}, connect_timeout={}s, timeout={}s",
            config.chat_url, config.connect_timeout_secs, config.request_timeout_secs
        );

        Ok(Self {
            client,
            chat_url: config.chat_url.clone(),
            health_timeout: Duration::from_secs(config.health_timeout_secs),
        })
    }

    /// `http://host:port/api/tags`, derived from the chat URL
    fn tags_url(&self) -> String {
        let base = self
            .chat_url
            .strip_suffix("/api/chat")
            .unwrap_or(&self.chat_url);
        format!("{}/api/tags", base.trim_end_matches('/'))
    }
}

/// Pulls `message.content` out of a chat reply
pub fn extract_content(body: &str) -> Result<String, TranslateError> {
    let root = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(root)) => root,
        Ok(_) => {
            return Err(TranslateError::MalformedResponse(format!(
                "expected a JSON object: {}",
                body
            )))
        }
        Err(e) => return Err(TranslateError::MalformedResponse(e.to_string())),
    };

    let message = root
        .get("message")
        .ok_or_else(|| TranslateError::MissingMessage {
            body: body.to_string(),
        })?;

    let content = trim_blank(message.get("content").and_then(|c| c.as_str()).unwrap_or(""));

    if content.is_empty() {
        return Err(TranslateError::EmptyTranslation {
            body: body.to_string(),
        });
    }

    Ok(content.to_string())
}

#[async_trait]
impl ChatBackend for OllamaChatClient {
    async fn chat(&self, request: &ChatRequest) -> Result<String, TranslateError> {
        let start = Instant::now();
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(
            "Ollama chat took {}ms (model={}, status={})",
            start.elapsed().as_millis(),
            request.model,
            status.as_u16()
        );

        if status != StatusCode::OK {
            return Err(TranslateError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Ollama response body: {}", body);
        extract_content(&body)
    }

    async fn health_check(&self) -> bool {
        let request = self.client.get(self.tags_url()).timeout(self.health_timeout);
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama health check failed: {}", e);
                false
            }
        }
    }
}
