use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{RateLimiter, auth_middleware, log_errors, rate_limit},
};

pub mod ai;
pub mod health;
pub mod prediction;

/// 组装路由：公开路由与需认证路由分开挂载，再套全局中间件
pub fn create_router(state: AppState, limiter: Arc<RateLimiter>) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let protected_routes = Router::new()
        .route("/predict", post(prediction::predict))
        .route("/metadata", get(prediction::metadata))
        .route("/ai/generate", post(ai::generate_story))
        // 应用认证中间件
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = Router::new().nest(
        &state.config.api_base_uri,
        Router::new().merge(public_routes).merge(protected_routes),
    );

    // 限流在最外层，对全部路由生效
    router
        .layer(axum::middleware::from_fn(log_errors))
        .layer(axum::middleware::from_fn_with_state(limiter, rate_limit))
        .with_state(state)
}
