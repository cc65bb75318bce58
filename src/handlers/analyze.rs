use axum::Json;

use crate::middleware::analyze_request::AnalyzePayload;
use crate::types::AnalysisResponse;

/// POST /api/analyze -> fixed placeholder, body ignored.
pub async fn analyze_handler(AnalyzePayload(_body): AnalyzePayload) -> Json<AnalysisResponse> {
    Json(AnalysisResponse::placeholder())
}
