use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::config::SystemConfig;
use crate::handlers::{health_check, translate};
use crate::state::AppState;

pub fn create_routes(system_config: &SystemConfig) -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(system_config.max_body_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorConfig;
    use crate::error::TranslateError;
    use crate::translate::service::tests::RecordingBackend;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(backend: Arc<RecordingBackend>) -> Router {
        app_with_limits(backend, &SystemConfig::default())
    }

    fn app_with_limits(backend: Arc<RecordingBackend>, system_config: &SystemConfig) -> Router {
        let state = AppState::with_backend(backend, &TranslatorConfig::default());
        create_routes(system_config).with_state(state)
    }

    fn post_translate(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/translate")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_translate_success() {
        let backend = RecordingBackend::new(|| Ok("كيف حالك؟".to_string()));
        let (status, body) = send(
            app(backend.clone()),
            post_translate(r#"{"text":"Hello, how are you?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"translation": "كيف حالك؟"}));

        let sent = backend.last_request().unwrap();
        assert!(sent.messages[0].content.contains("ARABIC script"));
        assert_eq!(sent.options.temperature, 0.2);
    }

    #[tokio::test]
    async fn test_translate_missing_or_blank_text() {
        for payload in [
            r#"{}"#,
            r#"{"text":null}"#,
            r#"{"text":""}"#,
            r#"{"text":"   "}"#,
            r#"{"script":"latin"}"#,
            "null",
            "",
            "not json",
        ] {
            let backend = RecordingBackend::new(|| Ok("unused".to_string()));
            let (status, body) = send(app(backend.clone()), post_translate(payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload:?}");
            assert_eq!(body["error"], "Le champ 'text' est obligatoire.");
            assert!(backend.requests.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_translate_large_text_is_forwarded() {
        let backend = RecordingBackend::new(|| Ok("ok".to_string()));
        let text = "a".repeat(3 * 1024 * 1024);
        let payload = serde_json::json!({ "text": text }).to_string();

        let (status, body) = send(app(backend.clone()), post_translate(&payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translation"], "ok");
        let sent = backend.last_request().unwrap();
        assert!(sent.messages[1].content.ends_with(&text));
    }

    #[tokio::test]
    async fn test_translate_body_over_limit() {
        let backend = RecordingBackend::new(|| Ok("unused".to_string()));
        let system_config = SystemConfig {
            max_body_bytes: 1024,
            ..SystemConfig::default()
        };
        let payload = serde_json::json!({ "text": "a".repeat(4096) }).to_string();

        let (status, body) = send(
            app_with_limits(backend.clone(), &system_config),
            post_translate(&payload),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_ne!(body["error"], "Le champ 'text' est obligatoire.");
        assert!(backend.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translate_upstream_status() {
        let backend = RecordingBackend::new(|| {
            Err(TranslateError::UpstreamStatus {
                status: 503,
                body: "unavailable".to_string(),
            })
        });
        let (status, body) = send(app(backend), post_translate(r#"{"text":"hi"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Translation failed: "));
        assert!(error.contains("503"));
    }

    #[tokio::test]
    async fn test_translate_missing_message_includes_raw_body() {
        let backend = RecordingBackend::new(|| {
            Err(TranslateError::MissingMessage {
                body: r#"{"done":true}"#.to_string(),
            })
        });
        let (status, body) = send(app(backend), post_translate(r#"{"text":"hi"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains(r#"{"done":true}"#));
    }

    #[tokio::test]
    async fn test_translate_empty_translation() {
        let backend = RecordingBackend::new(|| {
            Err(TranslateError::EmptyTranslation {
                body: r#"{"message":{"content":"  "}}"#.to_string(),
            })
        });
        let (status, body) = send(app(backend), post_translate(r#"{"text":"hi"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("empty translation"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let backend = RecordingBackend::new(|| Ok(String::new()));
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(backend), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ollama"], true);
    }
}
