use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;
use nr_core::{Article, Error, NewsSource, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SORT_BY: &str = "relevancy";
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: usize,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl NewsApiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the NewsAPI `everything` endpoint.
pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
    endpoint: Url,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&base)
            .and_then(|u| u.join("everything"))
            .map_err(|e| Error::Config(format!("Invalid news API URL '{}': {}", config.base_url, e)))?;

        let client = Client::builder()
            .user_agent(concat!("nr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let page_size = self.config.page_size.to_string();
        let response = self.client
            .get(self.endpoint.clone())
            .header("X-Api-Key", self.config.api_key.as_deref().unwrap_or_default())
            .query(&[
                ("q", query),
                ("language", self.config.language.as_str()),
                ("sortBy", self.config.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<EverythingResponse>(&body);

        match parsed {
            Ok(parsed) if status.is_success() && parsed.status == "ok" => {
                tracing::debug!(
                    "NewsAPI returned {} of {} results for '{}'",
                    parsed.articles.len(),
                    parsed.total_results,
                    query
                );
                Ok(parsed.articles)
            }
            Ok(parsed) => Err(Error::Search(format!(
                "{}: {}",
                parsed.code.unwrap_or_else(|| status.as_u16().to_string()),
                parsed.message.unwrap_or_else(|| "request failed".to_string())
            ))),
            Err(e) if status.is_success() => Err(Error::Serialization(e)),
            Err(_) => Err(Error::Search(format!("{}: unexpected response from news API", status.as_u16()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use axum::extract::{Query, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[derive(Clone, Default)]
    struct Seen {
        params: Arc<Mutex<Option<HashMap<String, String>>>>,
        api_key: Arc<Mutex<Option<String>>>,
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn everything(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        *seen.api_key.lock().unwrap() = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        *seen.params.lock().unwrap() = Some(params);
        Json(json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": "reuters", "name": "Reuters"},
                    "author": "Jane Doe",
                    "title": "Tesla earnings beat",
                    "description": "Revenue rose.",
                    "url": "https://example.com/1",
                    "urlToImage": null,
                    "publishedAt": "2024-04-23T20:15:00Z",
                    "content": "..."
                },
                {
                    "source": {"id": null, "name": "Bloomberg"},
                    "author": null,
                    "title": "Tesla margins shrink",
                    "description": null,
                    "url": "https://example.com/2",
                    "urlToImage": null,
                    "publishedAt": "2024-04-24T08:00:00Z",
                    "content": null
                }
            ]
        }))
    }

    #[tokio::test]
    async fn test_search_sends_fixed_parameters() {
        let seen = Seen::default();
        let router = Router::new()
            .route("/v2/everything", get(everything))
            .with_state(seen.clone());
        let base = spawn_server(router).await;

        let config = NewsApiConfig::new(Some("news-key".to_string()))
            .with_base_url(format!("{}/v2", base));
        let client = NewsApiClient::new(config).unwrap();
        let articles = client.search("Tesla earnings").await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source_name(), "Reuters");
        assert_eq!(articles[0].description.as_deref(), Some("Revenue rose."));
        assert_eq!(articles[1].description, None);
        assert_eq!(articles[1].published_date(), "2024-04-24");

        let params = seen.params.lock().unwrap().clone().unwrap();
        assert_eq!(params.get("q").map(String::as_str), Some("Tesla earnings"));
        assert_eq!(params.get("language").map(String::as_str), Some("en"));
        assert_eq!(params.get("sortBy").map(String::as_str), Some("relevancy"));
        assert_eq!(params.get("pageSize").map(String::as_str), Some("5"));
        assert_eq!(seen.api_key.lock().unwrap().as_deref(), Some("news-key"));
    }

    #[tokio::test]
    async fn test_search_reports_api_error_body() {
        let router = Router::new().route(
            "/everything",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "status": "error",
                        "code": "apiKeyInvalid",
                        "message": "Your API key is invalid or incorrect."
                    })),
                )
            }),
        );
        let base = spawn_server(router).await;

        let client = NewsApiClient::new(NewsApiConfig::new(None).with_base_url(base)).unwrap();
        let err = client.search("anything").await.unwrap_err();
        match err {
            Error::Search(message) => {
                assert!(message.contains("apiKeyInvalid"));
                assert!(message.contains("Your API key is invalid"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_search_keeps_page_with_null_fields() {
        let router = Router::new().route(
            "/everything",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [
                        {
                            "source": {"id": null, "name": "Reuters"},
                            "title": "Tesla earnings beat",
                            "description": "Revenue rose.",
                            "url": "https://example.com/1",
                            "publishedAt": "2024-04-23T20:15:00Z"
                        },
                        {
                            "source": {"id": null, "name": null},
                            "author": null,
                            "title": null,
                            "description": null,
                            "url": "https://example.com/2",
                            "urlToImage": null,
                            "publishedAt": "2024-04-24T08:00:00Z",
                            "content": null
                        }
                    ]
                }))
            }),
        );
        let base = spawn_server(router).await;

        let client = NewsApiClient::new(NewsApiConfig::new(None).with_base_url(base)).unwrap();
        let articles = client.search("Tesla").await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Tesla earnings beat");
        assert_eq!(articles[1].title, "");
        assert_eq!(articles[1].source_name(), "");
    }

    #[tokio::test]
    async fn test_search_reports_non_json_failure() {
        let router = Router::new().route(
            "/everything",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = spawn_server(router).await;

        let client = NewsApiClient::new(NewsApiConfig::new(None).with_base_url(base)).unwrap();
        let err = client.search("anything").await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = NewsApiClient::new(NewsApiConfig::new(None).with_base_url("not a url"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = NewsApiClient::new(NewsApiConfig::default()).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://newsapi.org/v2/everything");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = NewsApiConfig::new(Some("secret-key".to_string()));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
