mod handler;
mod model;

pub use handler::generate_story;
pub use model::{GenerateStoryRequest, GenerateStoryResponse};
