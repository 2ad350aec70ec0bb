//! Liveness handler

use axum::Json;
use serde::Serialize;

/// Constant acknowledgment returned by `GET /` regardless of model state.
pub const STATUS_MESSAGE: &str = "Diabetes Prediction API is running 🚀";

#[derive(Serialize)]
pub struct HomeResponse {
    message: &'static str,
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: STATUS_MESSAGE,
    })
}
