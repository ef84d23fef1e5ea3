use std::time::Duration;

use serde::Deserialize;
use stocklens_core::clean_text;

use crate::error::NewsError;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Articles used per fetch; anything past the first ten is discarded.
const MAX_ARTICLES: usize = 10;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

/// Client for the NewsAPI `everything` endpoint.
///
/// Use [`NewsClient::new`] for production or [`NewsClient::with_base_url`] to
/// point at a mock server in tests.
pub struct NewsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    /// Creates a new client pointed at the production NewsAPI.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, NewsError> {
        Self::with_base_url(api_key, user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_base_url(
        api_key: &str,
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NewsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch recent articles about `stock_name` and concatenate the first ten
    /// into one cleaned string (title + description + body per article,
    /// missing fields treated as empty).
    ///
    /// A non-200 response degrades to an empty string with a warn log rather
    /// than an error, so a flaky news upstream never aborts the request.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] on transport failures and
    /// [`NewsError::Parse`] if a 200 body does not match the expected shape.
    pub async fn fetch_combined_text(&self, stock_name: &str) -> Result<String, NewsError> {
        let response = self
            .client
            .get(format!("{}/v2/everything", self.base_url))
            .query(&[
                ("q", stock_name),
                ("sortBy", "publishedAt"),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(
                stock = stock_name,
                status = %response.status(),
                "news fetch returned non-200, degrading to empty text"
            );
            return Ok(String::new());
        }

        let news: NewsResponse = response
            .json()
            .await
            .map_err(|e| NewsError::Parse(e.to_string()))?;

        let combined = news
            .articles
            .iter()
            .take(MAX_ARTICLES)
            .map(|article| {
                clean_text(&format!(
                    "{} {} {}",
                    article.title.as_deref().unwrap_or_default(),
                    article.description.as_deref().unwrap_or_default(),
                    article.content.as_deref().unwrap_or_default()
                ))
            })
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(
            stock = stock_name,
            articles = news.articles.len().min(MAX_ARTICLES),
            "combined news articles"
        );

        Ok(combined)
    }
}
