pub mod interface;
pub mod ollama;
pub mod prompt;
pub mod service;

pub use interface::*;
pub use ollama::OllamaChatClient;
pub use service::Translator;
