pub mod fetcher;
pub mod newsapi;

pub use fetcher::{ArticleFetcher, FetchOutcome, MAX_ARTICLES};
pub use newsapi::{NewsApiClient, NewsApiConfig};
