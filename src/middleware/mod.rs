mod auth;
mod error_handler;
mod rate_limit;

pub use auth::{API_KEY_HEADER, auth_middleware, verify_api_key};
pub use error_handler::log_errors;
pub use rate_limit::{RateLimiter, rate_limit};
