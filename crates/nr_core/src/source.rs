use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

/// A remote news search service.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Search for articles matching `query`, in the service's relevance order.
    async fn search(&self, query: &str) -> Result<Vec<Article>>;
}
