//! API route handlers.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info};

use scenario_core::ClassificationResult;

use crate::error::{ApiError, Result};
use crate::models::{
    AnalyzeRequest, ExtractRequest, ExtractResponse, HealthResponse, ReportRequest, ReportResponse,
};
use crate::state::AppState;

/// POST /api/analyze - Classify a scenario text.
pub async fn analyze_scenario(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ClassificationResult>> {
    debug!(
        content_len = req.content.len(),
        file_name = ?req.file_name,
        "Analyzing scenario"
    );

    let result = state.analyzer.analyze(&req.content).await?;

    info!(
        rating = %result.rating,
        categories = result.categories.len(),
        "Scenario analyzed"
    );
    Ok(Json(result))
}

/// POST /api/extract - Extract text from an uploaded document.
pub async fn extract_document(
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>> {
    let data = BASE64
        .decode(&req.data)
        .map_err(|e| ApiError::BadRequest(format!("invalid base64 payload: {e}")))?;

    debug!(file_name = %req.file_name, bytes = data.len(), "Extracting document text");

    let text = scenario_extract::extract_text_from_file_name(&data, &req.file_name)?;
    Ok(Json(ExtractResponse { text }))
}

/// POST /api/report - Render a report for a verdict.
pub async fn export_report(Json(req): Json<ReportRequest>) -> Result<Json<ReportResponse>> {
    let format: scenario_report::ReportFormat = req.format.into();
    let bytes = scenario_report::render_report(&req.file_name, &req.result, format)?;

    let base_name = req
        .file_name
        .rsplit_once('.')
        .map(|(base, _)| base)
        .unwrap_or(&req.file_name);
    let file_name = format!("{}_report.{}", base_name, format.extension());

    info!(file_name = %file_name, bytes = bytes.len(), "Report rendered");
    Ok(Json(ReportResponse {
        file_name,
        data: BASE64.encode(bytes),
    }))
}

/// GET /api/health - Liveness and configuration probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        external_classifier: state.analyzer.has_preferred(),
    })
}
