use std::sync::Arc;

use config::Config;
use groq::GroqClient;
use model::InferenceModel;

pub mod config;
pub mod error;
pub mod groq;
pub mod middleware;
pub mod model;
pub mod routes;

pub const API_VERSION: &str = "v1";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model: Arc<InferenceModel>,
    pub groq: Arc<GroqClient>,
}
