use axum::Json;

use crate::types::HealthMessage;

/// GET /api
pub async fn health_handler() -> Json<HealthMessage> {
    Json(HealthMessage::default())
}
