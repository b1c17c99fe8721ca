use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use crate::translate::interface::ErrorResponse;

pub const TEXT_REQUIRED_MESSAGE: &str = "Le champ 'text' est obligatoire.";

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("{}", TEXT_REQUIRED_MESSAGE)]
    Validation,

    /// Body could not be buffered, e.g. over the size limit
    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("Ollama API status={status} body={body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("invalid Ollama response ('message' field missing): {body}")]
    MissingMessage { body: String },

    #[error("empty translation returned by Ollama. Full response: {body}")]
    EmptyTranslation { body: String },

    #[error("malformed Ollama response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::Validation => StatusCode::BAD_REQUEST,
            TranslateError::UnreadableBody { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        let message = match &self {
            TranslateError::Validation | TranslateError::UnreadableBody { .. } => self.to_string(),
            _ => {
                error!("Translation failed: {:?}", self);
                format!("Translation failed: {}", self)
            }
        };

        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}
