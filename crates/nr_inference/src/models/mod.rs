use std::sync::Arc;
use nr_core::{CompletionModel, Result};

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiModel};

/// Build the hosted completion model used for narrative generation.
pub fn create_model(config: OpenAiConfig) -> Result<Arc<dyn CompletionModel>> {
    let model = OpenAiModel::new(config)?;
    tracing::debug!("Using {} model {}", model.name(), model.model());
    Ok(Arc::new(model))
}
