use anyhow::Context;
use clap::Parser;
use nr_core::CompletionModel;
use nr_inference::NarrativeGenerator;
use nr_news::{ArticleFetcher, NewsApiClient};
use nr_web::{AppState, Researcher};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::{Cli, Commands};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the service clients once and wire them into the pipeline.
fn build_researcher(cli: &Cli) -> anyhow::Result<Researcher> {
    let news = NewsApiClient::new(cli.news_config()).context("failed to create news client")?;
    info!("📰 News source ready: {}", news.endpoint());
    let model = nr_inference::create_model(cli.model_config()).context("failed to create model client")?;
    info!("🧠 Inference model ready (using {})", model.name());

    Ok(Researcher::new(
        ArticleFetcher::new(Arc::new(news)),
        NarrativeGenerator::new(model),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    for name in cli.missing_credentials() {
        warn!("⚠️ {} is not set; requests will fail. {}", name, nr_web::page::CREDENTIALS_HINT);
    }

    let researcher = build_researcher(&cli)?;

    match cli.command {
        Commands::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("failed to bind {}", bind))?;
            nr_web::serve(listener, AppState::new(researcher)).await?;
        }
        Commands::Ask { query } => {
            let query = query.join(" ");
            info!("🔍 Fetching and analyzing news articles...");
            let outcome = researcher.research(&query).await;
            let (out, err) = report::render(&outcome);
            std::io::stdout().write_all(out.as_bytes())?;
            std::io::stderr().write_all(err.as_bytes())?;
        }
    }

    Ok(())
}
