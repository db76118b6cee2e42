use axum::Json;
use chrono::Utc;

use crate::API_VERSION;

use super::model::HealthResponse;

#[axum::debug_handler]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: API_VERSION.to_string(),
    })
}
