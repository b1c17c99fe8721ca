use std::sync::Arc;

use crate::config::TranslatorConfig;
use crate::translate::{ChatBackend, OllamaChatClient, Translator};

#[derive(Clone)]
pub struct AppState {
    pub translator: Translator,
}

impl AppState {
    pub fn new(config: &TranslatorConfig) -> anyhow::Result<Self> {
        let backend = Arc::new(OllamaChatClient::new(config)?);
        Ok(Self::with_backend(backend, config))
    }

    /// Build state around any chat backend
    pub fn with_backend(backend: Arc<dyn ChatBackend>, config: &TranslatorConfig) -> Self {
        Self {
            translator: Translator::new(backend, config),
        }
    }
}
