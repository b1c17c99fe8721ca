use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

/// `POST /translate`
///
/// A body that cannot be buffered (e.g. over the size limit) keeps its own status;
/// any other body that cannot be read as a request object counts as a missing payload.
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::BytesRejection(rejection)) => {
            warn!("Could not read translate payload: {}", rejection.body_text());
            return Err(TranslateError::UnreadableBody {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
        Err(rejection) => {
            debug!("Rejected translate payload: {}", rejection.body_text());
            return Err(TranslateError::Validation);
        }
    };

    let response = state.translator.translate(&request).await?;
    info!("Translated {} chars", response.translation.chars().count());
    Ok(Json(response))
}

/// `GET /api/health`
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let ollama_healthy = state.translator.backend().health_check().await;
    Json(json!({
        "status": "ok",
        "ollama": ollama_healthy
    }))
}
