pub mod generator;
pub mod models;
pub mod prompt;

pub use generator::NarrativeGenerator;
pub use models::{create_model, OpenAiConfig, OpenAiModel};
pub use prompt::render_prompt;
