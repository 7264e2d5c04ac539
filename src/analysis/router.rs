use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::domain::{round2, round3, AnalysisView};
use super::service::ProposalAnalysisService;
use super::validation::ProposalDraft;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router(service: Arc<ProposalAnalysisService>) -> Router {
    Router::new()
        .route("/api/v1/proposals/analyze", post(analyze_handler))
        .route("/api/v1/proposals/analyze/batch", post(analyze_batch_handler))
        .route("/api/v1/proposals/health", get(analysis_health_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchAnalysisRequest {
    pub proposals: Vec<ProposalDraft>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchAnalysisResponse {
    pub results: Vec<AnalysisView>,
    pub total_processed: usize,
    pub processing_time: f64,
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<ProposalAnalysisService>>,
    Json(draft): Json<ProposalDraft>,
) -> Response {
    match service.analyze_draft(draft) {
        Ok(result) => {
            info!(
                score = result.overall_score,
                seconds = result.processing_seconds,
                "proposal analysis completed"
            );
            (StatusCode::OK, Json(result.to_view())).into_response()
        }
        Err(error) => validation_response(error.to_string()),
    }
}

pub(crate) async fn analyze_batch_handler(
    State(service): State<Arc<ProposalAnalysisService>>,
    Json(request): Json<BatchAnalysisRequest>,
) -> Response {
    let requested = request.proposals.len();

    match service.analyze_batch(request.proposals) {
        Ok(batch) => {
            info!(
                requested,
                processed = batch.total_processed,
                seconds = batch.processing_seconds,
                "batch analysis completed"
            );
            let response = BatchAnalysisResponse {
                results: batch.results.iter().map(|result| result.to_view()).collect(),
                total_processed: batch.total_processed,
                processing_time: round3(batch.processing_seconds),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => validation_response(error.to_string()),
    }
}

pub(crate) async fn analysis_health_handler(
    State(service): State<Arc<ProposalAnalysisService>>,
) -> Response {
    let result = service.self_test();

    let payload = json!({
        "status": "healthy",
        "service": "analysis",
        "test_score": round2(result.overall_score),
        "processing_time": round3(result.processing_seconds),
    });

    (StatusCode::OK, Json(payload)).into_response()
}

fn validation_response(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
