//! Request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use triage_classify::local_result;
use triage_core::responses::{
    ClassifyRequest, EndpointInfo, ErrorBody, HealthResponse, InfoResponse,
};
use triage_core::{ClassificationResult, Source, Submission, ValidationError};

use crate::{AppState, SERVICE_NAME, VERSION};

const CONTENT_REQUIRED: &str = "Email content is required";
const CONTENT_TOO_SHORT: &str = "Email content too short (minimum 10 chars)";
const NOT_FOUND: &str = "Endpoint not found";
const DESCRIPTION: &str = "Sistema inteligente de classificação de emails";

/// A status code with an `{error}` body.
pub struct ApiError(StatusCode, &'static str);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(ErrorBody::new(self.1))).into_response()
    }
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classify", post(classify))
        .route("/health", get(health))
        .route("/info", get(info))
}

async fn classify(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let started = Instant::now();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected classify body");
            return Err(ApiError(StatusCode::BAD_REQUEST, CONTENT_REQUIRED));
        }
    };
    let Some(content) = request.content else {
        return Err(ApiError(StatusCode::BAD_REQUEST, CONTENT_REQUIRED));
    };

    let submission = Submission::new(
        &content,
        request.source.unwrap_or(Source::Text),
        request.filename,
    )
    .map_err(|e| match e {
        ValidationError::TooShort { .. } => ApiError(StatusCode::BAD_REQUEST, CONTENT_TOO_SHORT),
        _ => ApiError(StatusCode::BAD_REQUEST, CONTENT_REQUIRED),
    })?;

    let mut result = local_result(state.classifier.as_ref(), submission.content());
    result.processing_time = Some(started.elapsed().as_secs_f64());

    tracing::info!(
        category = %result.category,
        confidence = result.confidence,
        source = ?submission.source(),
        "classified"
    );
    Ok(Json(result))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now(),
        model_enabled: false,
    })
}

async fn info() -> Json<InfoResponse> {
    let endpoint = |route: &str, description: &str| EndpointInfo {
        route: route.to_string(),
        description: description.to_string(),
    };

    Json(InfoResponse {
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
        endpoints: vec![
            endpoint("POST /classify", "Classify email content"),
            endpoint("GET /health", "Health check"),
            endpoint("GET /info", "API information"),
        ],
        model_enabled: false,
    })
}

pub async fn not_found() -> ApiError {
    ApiError(StatusCode::NOT_FOUND, NOT_FOUND)
}
