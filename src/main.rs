//! Predictor service entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diabetes_predictor::config::Config;
use diabetes_predictor::model::Classifier;
use diabetes_predictor::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diabetes_predictor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Diabetes prediction service starting...");

    // Load the artifact once; a missing or unreadable artifact degrades the
    // service instead of crashing it.
    let model = match Classifier::load(&config.model_path) {
        Ok(classifier) => {
            tracing::info!("Model loaded from {}", config.model_path.display());
            Some(Arc::new(classifier))
        }
        Err(e) => {
            tracing::error!(
                "Could not load model from {}: {}. Serving without a model.",
                config.model_path.display(),
                e
            );
            None
        }
    };

    let state = AppState { model };
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
