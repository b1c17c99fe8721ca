use std::sync::Arc;
use tracing::debug;

use super::interface::{
    trim_blank, ChatBackend, ChatOptions, ChatRequest, Script, TranslationRequest, TranslationResponse,
};
use super::prompt::build_messages;
use crate::config::TranslatorConfig;
use crate::error::TranslateError;

/// Validates a request, builds the Darija prompt and asks the backend once.
#[derive(Clone)]
pub struct Translator {
    backend: Arc<dyn ChatBackend>,
    model: String,
    default_temperature: f64,
}

impl Translator {
    pub fn new(backend: Arc<dyn ChatBackend>, config: &TranslatorConfig) -> Self {
        Self {
            backend,
            model: config.model.clone(),
            default_temperature: config.default_temperature,
        }
    }

    pub fn backend(&self) -> &Arc<dyn ChatBackend> {
        &self.backend
    }

    /// Outbound body for a validated request
    pub fn chat_request(&self, text: &str, script: Script, temperature: Option<f64>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: build_messages(text, script),
            stream: false,
            options: ChatOptions {
                temperature: temperature.unwrap_or(self.default_temperature),
            },
        }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let input = request
            .text
            .as_deref()
            .map(trim_blank)
            .filter(|t| !t.is_empty())
            .ok_or(TranslateError::Validation)?;

        let script = Script::normalize(request.script.as_deref());

        // The configured model always wins
        if let Some(requested) = &request.model {
            debug!("Ignoring requested model '{}', using '{}'", requested, self.model);
        }

        let chat_request = self.chat_request(input, script, request.temperature);
        debug!(
            "Translating {} chars: script={}, temperature={}",
            input.chars().count(),
            script.as_str(),
            chat_request.options.temperature
        );

        let translation = self.backend.chat(&chat_request).await?;
        Ok(TranslationResponse { translation })
    }
}
