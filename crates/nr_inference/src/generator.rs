use std::sync::Arc;
use nr_core::CompletionModel;
use crate::prompt::render_prompt;

/// Turns a query plus assembled article text into the model's narrative.
#[derive(Clone)]
pub struct NarrativeGenerator {
    model: Arc<dyn CompletionModel>,
}

impl NarrativeGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Returns the model's response verbatim, or an error description in
    /// place of the narrative if the call fails.
    pub async fn generate(&self, query: &str, assembled_text: &str) -> String {
        let prompt = render_prompt(query, assembled_text);
        tracing::info!("🤖 Generating summary with {}", self.model.name());
        match self.model.complete(&prompt).await {
            Ok(narrative) => {
                tracing::info!("✨ Summary generated ({} chars)", narrative.len());
                narrative
            }
            Err(e) => {
                tracing::error!("Error generating summary: {}", e);
                format!("Error generating summary: {}", e)
            }
        }
    }
}
