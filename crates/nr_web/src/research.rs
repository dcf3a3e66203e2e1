use serde::Serialize;
use nr_core::{assemble_text, Article, QueryResult};
use nr_inference::NarrativeGenerator;
use nr_news::ArticleFetcher;

/// How one research interaction ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResearchOutcome {
    /// Nothing to search for; no calls were made.
    EmptyQuery,
    /// The fetch produced no articles, either because nothing matched or
    /// because the search failed (`fetch_error`). Generation was skipped.
    NoArticles { fetch_error: Option<String> },
    Completed {
        result: QueryResult,
        articles: Vec<Article>,
    },
}

/// The fetch, assemble, generate pipeline.
#[derive(Clone)]
pub struct Researcher {
    fetcher: ArticleFetcher,
    generator: NarrativeGenerator,
}

impl Researcher {
    pub fn new(fetcher: ArticleFetcher, generator: NarrativeGenerator) -> Self {
        Self { fetcher, generator }
    }

    /// Run one interaction. A blank query is rejected up front; any other
    /// query is searched for and placed in the prompt exactly as typed.
    pub async fn research(&self, query: &str) -> ResearchOutcome {
        if query.trim().is_empty() {
            return ResearchOutcome::EmptyQuery;
        }

        let fetched = self.fetcher.fetch(query).await;
        if fetched.articles().is_empty() {
            let fetch_error = fetched.error().map(str::to_string);
            match &fetch_error {
                Some(_) => tracing::warn!("No articles for '{}' after failed search", query),
                None => tracing::warn!("No articles found for '{}'", query),
            }
            return ResearchOutcome::NoArticles { fetch_error };
        }
        let articles = fetched.into_articles();

        let assembled_text = assemble_text(&articles);
        tracing::debug!("📑 Assembled {} chars from {} articles", assembled_text.len(), articles.len());
        let narrative = self.generator.generate(query, &assembled_text).await;

        tracing::info!("✅ Research completed: {}", query);
        ResearchOutcome::Completed {
            result: QueryResult {
                query: query.to_string(),
                assembled_text,
                narrative,
            },
            articles,
        }
    }
}
