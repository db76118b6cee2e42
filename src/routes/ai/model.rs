use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::groq::GenerationParams;

/// 故事生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateStoryRequest {
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    /// 为true时以增量文本流返回
    #[serde(default)]
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub content: String,
    pub model: String,
    pub generated_at: String,
}

impl GenerateStoryRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::BadRequest("未提供提示词".to_string()));
        }

        Ok(())
    }

    /// 未显式给出的参数回落到默认值
    pub fn params(&self) -> GenerationParams {
        let defaults = GenerationParams::default();

        GenerationParams {
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            top_p: self.top_p.unwrap_or(defaults.top_p),
        }
    }
}
