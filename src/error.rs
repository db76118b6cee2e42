use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    RateLimitExceeded,
    Unauthorized,
    BadRequest(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::RateLimitExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "请求过于频繁，请稍后重试".to_string(),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "无效的API密钥".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            error_message,
        });

        (status, body).into_response()
    }
}
