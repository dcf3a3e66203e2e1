use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use crate::page::{render_page, PageContent};
use crate::research::{ResearchOutcome, Researcher};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Run the pipeline on its own task so a panic inside it is reported to the
/// user instead of dropping the connection.
async fn run_research(researcher: Researcher, query: String) -> Result<ResearchOutcome, String> {
    tokio::spawn(async move { researcher.research(&query).await })
        .await
        .map_err(|e| {
            tracing::error!("Research task failed: {}", e);
            e.to_string()
        })
}

pub async fn index() -> impl IntoResponse {
    Html(render_page("", &PageContent::Form))
}

pub async fn research_page(
    State(state): State<Arc<AppState>>,
    Form(request): Form<ResearchRequest>,
) -> impl IntoResponse {
    let content = match run_research(state.researcher.clone(), request.query.clone()).await {
        Ok(outcome) => PageContent::Outcome(outcome),
        Err(message) => PageContent::Failure(message),
    };
    Html(render_page(&request.query, &content))
}

pub async fn research_api(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResearchRequest>,
) -> impl IntoResponse {
    match run_research(state.researcher.clone(), request.query).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(message) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "status": "error", "error": message })),
        )
            .into_response(),
    }
}

pub async fn health() -> &'static str {
    "ok"
}
