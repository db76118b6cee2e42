use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::Prediction;

/// 预测请求
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    /// 输入特征向量
    pub features: Vec<f64>,
    /// 希望使用的模型版本，目前仅作记录
    pub model_version: Option<String>,
}

/// 预测结果信封
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub confidence: f64,
    pub model_version: String,
    pub prediction_id: String,
}

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub model_name: String,
    pub model_version: String,
    pub input_shape: Vec<i64>,
    pub output_shape: Vec<i64>,
    pub last_updated: String,
}

impl PredictionRequest {
    /// 结构校验，类型层面的约束由反序列化阶段保证
    pub fn validate(&self) -> Result<(), AppError> {
        if self.features.is_empty() {
            return Err(AppError::BadRequest("未提供特征数据".to_string()));
        }

        Ok(())
    }
}

impl PredictionResponse {
    pub fn build(result: Prediction, model_version: &str) -> Self {
        Self {
            prediction: result.value,
            confidence: result.confidence,
            model_version: model_version.to_string(),
            // 随机标识，同一秒内的并发请求也不会相撞
            prediction_id: format!("pred_{}", Uuid::new_v4().simple()),
        }
    }
}
