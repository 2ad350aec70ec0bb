//! Prediction handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::features::{self, FeatureVector};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub features: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: usize,
    pub probability_percent: f64,
}

/// Run one inference against the shared read-only model.
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let model = state.model.as_ref().ok_or(AppError::ModelNotLoaded)?;

    let raw = req
        .features
        .ok_or_else(|| AppError::ValidationError(features::schema_requirement()))?;
    let features =
        FeatureVector::from_vec(raw).map_err(|e| AppError::ValidationError(e.to_string()))?;

    let prediction = model.predict_one(&features)?;

    tracing::debug!(
        label = prediction.label,
        probability_percent = prediction.probability_percent,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        prediction: prediction.label,
        probability_percent: prediction.probability_percent,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::features::FEATURE_NAMES;
    use crate::handlers::home::STATUS_MESSAGE;
    use crate::model::test_support::trained_classifier;
    use crate::{create_router, AppState};

    fn router_without_model() -> axum::Router {
        create_router(AppState { model: None })
    }

    fn router_with_model() -> axum::Router {
        create_router(AppState {
            model: Some(Arc::new(trained_classifier())),
        })
    }

    async fn post_predict(router: axum::Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_home_returns_constant_message() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router_without_model().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], STATUS_MESSAGE);
    }

    #[tokio::test]
    async fn test_predict_without_model_is_server_error() {
        let (status, body) = post_predict(
            router_without_model(),
            json!({ "features": [1, 85, 66, 29, 0, 26.6, 0.351, 31] }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Model is not loaded. Cannot make predictions."
        );
    }

    #[tokio::test]
    async fn test_predict_returns_label_and_percentage() {
        let (status, body) = post_predict(
            router_with_model(),
            json!({ "features": [1, 85, 66, 29, 0, 26.6, 0.351, 31] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let label = body["prediction"].as_u64().unwrap();
        assert!(label == 0 || label == 1);
        let percent = body["probability_percent"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&percent));
    }

    #[tokio::test]
    async fn test_predict_probability_is_positive_class() {
        let (status, body) = post_predict(
            router_with_model(),
            json!({ "features": [4, 170, 70, 24, 60, 35.5, 0.45, 40] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prediction"], 1);
        let percent = body["probability_percent"].as_f64().unwrap();
        assert!(percent > 50.0, "positive prediction but percent = {percent}");
    }

    #[tokio::test]
    async fn test_predict_rejects_wrong_feature_count() {
        for count in [7, 9] {
            let (status, body) =
                post_predict(router_with_model(), json!({ "features": vec![1.0; count] })).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            let message = body["error"].as_str().unwrap();
            for name in FEATURE_NAMES {
                assert!(message.contains(name), "missing {name} in: {message}");
            }
        }
    }

    #[tokio::test]
    async fn test_predict_rejects_missing_features_field() {
        let (status, body) = post_predict(router_with_model(), json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("exactly 8 features"));
    }

    #[tokio::test]
    async fn test_home_still_healthy_when_model_missing() {
        // Degraded mode: inference is down but liveness is not.
        let router = router_without_model();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, _) = post_predict(router, json!({ "features": vec![1.0; 8] })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
