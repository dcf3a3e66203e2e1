use async_trait::async_trait;
use crate::Result;

/// A hosted text-generation model that turns one prompt into one response.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
