use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::{AppState, error::AppError};

pub const API_KEY_HEADER: &str = "api-key";

pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    verify_api_key(presented, &state.config.api_key)?;

    Ok(next.run(req).await)
}

/// 校验请求携带的API密钥，缺失或不匹配都视为未授权
pub fn verify_api_key(presented: Option<&str>, expected: &str) -> Result<(), AppError> {
    let presented = presented.ok_or(AppError::Unauthorized)?;

    // 对两侧先取摘要再比较，明文不参与逐字节比较
    let presented_digest = Sha256::digest(presented.as_bytes());
    let expected_digest = Sha256::digest(expected.as_bytes());

    if presented_digest != expected_digest {
        return Err(AppError::Unauthorized);
    }

    Ok(())
}
