use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{config::Config, error::AppError};

/// 滑动窗口限流器，统计全站请求总量，不按调用方区分
pub struct RateLimiter {
    requests: Mutex<VecDeque<Instant>>,
    capacity: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(config: &Config) -> Self {
        Self::with_limits(config.rate_limit_requests, config.rate_limit_window())
    }

    pub fn with_limits(requests: u32, window: Duration) -> Self {
        Self {
            requests: Mutex::new(VecDeque::new()),
            capacity: requests as usize,
            window,
        }
    }

    /// 准入判定：窗口内已满则拒绝，否则记录本次请求
    pub fn admit(&self) -> bool {
        self.admit_at(Instant::now())
    }

    // 清理加追加必须在同一次持锁内完成
    fn admit_at(&self, now: Instant) -> bool {
        let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cutoff) = now.checked_sub(self.window) {
            while requests.front().is_some_and(|t| *t <= cutoff) {
                requests.pop_front();
            }
        }

        if requests.len() >= self.capacity {
            return false;
        }

        requests.push_back(now);
        true
    }
}

pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.admit() {
        tracing::warn!("Rate limit exceeded, rejecting {}", req.uri().path());
        return AppError::RateLimitExceeded.into_response();
    }

    next.run(req).await
}
