use axum::{
    Json,
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{AppState, error::AppError};

use super::model::{GenerateStoryRequest, GenerateStoryResponse};

#[axum::debug_handler]
pub async fn generate_story(
    State(state): State<AppState>,
    Json(req): Json<GenerateStoryRequest>,
) -> Result<Response, AppError> {
    req.validate()?;

    let params = req.params();
    tracing::info!("Generating story, stream={}", req.stream);

    if req.stream {
        let stream = state
            .groq
            .generate_stream(&req.prompt, &params)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        return Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from_stream(stream),
        )
            .into_response());
    }

    let content = state
        .groq
        .generate(&req.prompt, &params)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(GenerateStoryResponse {
        content,
        model: state.config.groq_model.clone(),
        generated_at: Utc::now().to_rfc3339(),
    })
    .into_response())
}
