use axum::{
    Json,
    extract::State,
};

use crate::{AppState, error::AppError};

use super::model::{MetadataResponse, PredictionRequest, PredictionResponse};

#[axum::debug_handler]
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    tracing::info!("Received prediction request with {} features", req.features.len());

    req.validate()?;

    let result = state
        .model
        .predict(&req.features)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let response = PredictionResponse::build(result, &state.model.version);

    tracing::info!("Prediction completed: {}", response.prediction_id);

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn metadata(State(state): State<AppState>) -> Json<MetadataResponse> {
    Json(MetadataResponse {
        model_name: state.model.name.clone(),
        model_version: state.model.version.clone(),
        input_shape: state.model.input_shape.clone(),
        output_shape: state.model.output_shape.clone(),
        last_updated: state.model.loaded_at.to_rfc3339(),
    })
}
