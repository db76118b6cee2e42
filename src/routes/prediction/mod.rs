mod handler;
mod model;

pub use handler::{metadata, predict};
pub use model::{MetadataResponse, PredictionRequest, PredictionResponse};
