mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("darija_translator=debug,tower_http=debug")),
        )
        .init();

    let config = load_config();
    info!(
        "Using model {} at {}",
        config.translator_config.model, config.translator_config.chat_url
    );

    let app_state = AppState::new(&config.translator_config)?;

    let app = Router::new()
        .merge(routes::create_routes(&config.system_config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("{}:{}", config.system_config.host, config.system_config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// First config file that loads wins, otherwise built-in defaults
fn load_config() -> Config {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path);
                return config;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    info!("No config file found (tried {:?}), using defaults", config_paths);
    Config::default()
}
