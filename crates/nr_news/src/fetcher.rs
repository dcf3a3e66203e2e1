use std::sync::Arc;
use nr_core::{Article, NewsSource};

/// Upper bound on articles handed to the rest of the pipeline.
pub const MAX_ARTICLES: usize = 5;

/// What a single fetch produced.
///
/// `Found` may hold zero articles when the search simply matched nothing.
/// `Failed` carries the reason the search could not be performed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Vec<Article>),
    Failed(String),
}

impl FetchOutcome {
    /// The fetched articles; empty when the fetch failed.
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchOutcome::Found(articles) => articles,
            FetchOutcome::Failed(_) => &[],
        }
    }

    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Found(articles) => articles,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Found(_) => None,
            FetchOutcome::Failed(reason) => Some(reason),
        }
    }
}

#[derive(Clone)]
pub struct ArticleFetcher {
    source: Arc<dyn NewsSource>,
}

impl ArticleFetcher {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    /// Fetch up to [`MAX_ARTICLES`] articles for `query`. Never fails; search
    /// errors are logged and reported as [`FetchOutcome::Failed`].
    pub async fn fetch(&self, query: &str) -> FetchOutcome {
        tracing::info!("📰 Fetching articles for '{}' from {}", query, self.source.name());
        match self.source.search(query).await {
            Ok(mut articles) => {
                articles.truncate(MAX_ARTICLES);
                tracing::info!("✨ Found {} articles", articles.len());
                FetchOutcome::Found(articles)
            }
            Err(e) => {
                tracing::error!("Error fetching news: {}", e);
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}
