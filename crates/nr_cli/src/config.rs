use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use nr_inference::OpenAiConfig;
use nr_news::NewsApiConfig;

#[derive(Parser, Debug)]
#[command(name = "nr", author, version, about = "Equity research news tool", long_about = None)]
pub struct Cli {
    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of the news search API
    #[arg(long, env = "NR_NEWS_URL", default_value = nr_news::newsapi::DEFAULT_BASE_URL)]
    pub news_url: String,

    /// Base URL of the completion API
    #[arg(long, env = "NR_MODEL_URL", default_value = nr_inference::models::openai::DEFAULT_BASE_URL)]
    pub model_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the browser UI
    Serve {
        /// Listen address
        #[arg(long, env = "NR_BIND", default_value = "127.0.0.1:8501")]
        bind: SocketAddr,
    },
    /// Research a single query and print the result
    Ask {
        /// The research topic, e.g. "Tesla earnings"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

impl Cli {
    pub fn news_config(&self) -> NewsApiConfig {
        NewsApiConfig::new(self.newsapi_key.clone()).with_base_url(self.news_url.clone())
    }

    pub fn model_config(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.openai_api_key.clone()).with_base_url(self.model_url.clone())
    }

    /// Names of credentials that are not set. Calls fail at request time
    /// without them; startup does not.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.newsapi_key.as_deref().map_or(true, str::is_empty) {
            missing.push("NEWSAPI_KEY");
        }
        if self.openai_api_key.as_deref().map_or(true, str::is_empty) {
            missing.push("OPENAI_API_KEY");
        }
        missing
    }
}
