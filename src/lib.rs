//! Diabetes prediction service
//!
//! Two components sharing one crate:
//!
//! - the `train` binary fits a logistic classifier on a CSV dataset and
//!   writes the artifact (see [`model::train`]);
//! - the service binary loads that artifact once at startup and serves
//!   predictions over HTTP (`GET /`, `POST /predict`).
//!
//! The loaded model is the only shared state: set once, read-only, held for
//! the process lifetime.

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use model::Classifier;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded classifier, `None` when startup found no usable artifact
    /// (degraded mode: liveness still works, predictions return 500).
    pub model: Option<Arc<Classifier>>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
