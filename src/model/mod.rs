use chrono::{DateTime, Utc};

use crate::config::Config;

// 占位模型的固定置信度
const FIXED_CONFIDENCE: f64 = 0.95;

#[derive(Debug)]
pub enum ModelError {
    EmptyInput,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyInput => write!(f, "no features to run inference on"),
        }
    }
}

impl std::error::Error for ModelError {}

#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub value: f64,
    pub confidence: f64,
}

/// 推理模型，进程启动时加载一次，此后只读
pub struct InferenceModel {
    pub name: String,
    pub version: String,
    pub input_shape: Vec<i64>,
    pub output_shape: Vec<i64>,
    pub loaded_at: DateTime<Utc>,
}

impl InferenceModel {
    pub fn load(config: &Config) -> Self {
        tracing::info!(
            "Loading model {} v{}",
            config.model_name,
            config.model_version
        );

        Self {
            name: config.model_name.clone(),
            version: config.model_version.clone(),
            input_shape: vec![4],
            output_shape: vec![1],
            loaded_at: Utc::now(),
        }
    }

    /// 占位实现：返回特征均值，接入真实模型时替换此处
    pub fn predict(&self, features: &[f64]) -> Result<Prediction, ModelError> {
        if features.is_empty() {
            return Err(ModelError::EmptyInput);
        }

        let value = features.iter().sum::<f64>() / features.len() as f64;

        Ok(Prediction {
            value,
            confidence: FIXED_CONFIDENCE,
        })
    }
}
