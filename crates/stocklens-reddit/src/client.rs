use std::time::Duration;

use serde::Deserialize;

use crate::error::RedditError;
use crate::types::{Comment, Listing, Submission, Thing};

const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Reddit OAuth token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Reddit API client holding a reusable access token.
///
/// Constructed once at process start and shared across requests; the token is
/// obtained by a client-credentials exchange and reused for the process
/// lifetime.
pub struct RedditClient {
    client: reqwest::Client,
    token: String,
    user_agent: String,
    api_base: String,
}

impl RedditClient {
    /// Create a new `RedditClient` by exchanging client credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] if token exchange fails, or
    /// [`RedditError::Http`] on transport failures.
    pub async fn new(
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self, RedditError> {
        Self::with_base_urls(
            client_id,
            client_secret,
            user_agent,
            timeout_secs,
            DEFAULT_TOKEN_URL,
            DEFAULT_API_BASE_URL,
        )
        .await
    }

    /// Create a client with custom token/API base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`RedditClient::new`].
    pub async fn with_base_urls(
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
        timeout_secs: u64,
        token_url: &str,
        api_base_url: &str,
    ) -> Result<Self, RedditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let token = Self::fetch_token(&client, token_url, client_id, client_secret, user_agent)
            .await?;

        Ok(Self {
            client,
            token,
            user_agent: user_agent.to_owned(),
            api_base: api_base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn fetch_token(
        client: &reqwest::Client,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
    ) -> Result<String, RedditError> {
        let response = client
            .post(token_url)
            .header("User-Agent", user_agent)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Api(format!(
                "token exchange failed with status {}",
                response.status()
            )));
        }

        let token_resp: TokenResponse = response
            .json()
            .await
            .map_err(|e| RedditError::Api(format!("token parse error: {e}")))?;

        Ok(token_resp.access_token)
    }

    /// Search one forum for submissions matching `query`.
    ///
    /// Restricted to the forum, sorted by relevance, limited to the past month.
    /// Submissions are returned in the order Reddit ranks them.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] on a non-success status or an unparseable
    /// body, [`RedditError::Http`] on transport failures.
    pub async fn search_submissions(
        &self,
        forum: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Submission>, RedditError> {
        let response = self
            .client
            .get(format!("{}/r/{forum}/search", self.api_base))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", &self.user_agent)
            .query(&[
                ("q", query),
                ("restrict_sr", "true"),
                ("sort", "relevance"),
                ("t", "month"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Api(format!(
                "search in r/{forum} failed with status {}",
                response.status()
            )));
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| RedditError::Api(format!("search response parse error: {e}")))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t3")
            .filter_map(to_submission)
            .collect())
    }

    /// Load the top-sorted top-level comments of a submission.
    ///
    /// `more`-stub children and deleted/removed bodies are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] on a non-success status or an unparseable
    /// body, [`RedditError::Http`] on transport failures.
    pub async fn top_comments(
        &self,
        forum: &str,
        article_id: &str,
    ) -> Result<Vec<Comment>, RedditError> {
        let response = self
            .client
            .get(format!(
                "{}/r/{forum}/comments/{article_id}",
                self.api_base
            ))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", &self.user_agent)
            .query(&[("sort", "top")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Api(format!(
                "comment load for r/{forum}/{article_id} failed with status {}",
                response.status()
            )));
        }

        // The comments endpoint returns two listings: the submission itself,
        // then its top-level comment tree.
        let listings: Vec<Listing> = response
            .json()
            .await
            .map_err(|e| RedditError::Api(format!("comments response parse error: {e}")))?;

        let Some(comment_listing) = listings.into_iter().nth(1) else {
            return Ok(Vec::new());
        };

        Ok(comment_listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t1")
            .filter_map(to_comment)
            .collect())
    }
}

fn to_submission(thing: Thing) -> Option<Submission> {
    let id = thing.data.id?;
    let title = thing.data.title?;
    let url = thing.data.url.or_else(|| {
        thing
            .data
            .permalink
            .as_ref()
            .map(|p| format!("https://reddit.com{p}"))
    })?;

    Some(Submission {
        id,
        title,
        selftext: thing.data.selftext.unwrap_or_default(),
        score: thing.data.score,
        num_comments: thing.data.num_comments,
        url,
    })
}

fn to_comment(thing: Thing) -> Option<Comment> {
    let body = thing
        .data
        .body
        .filter(|body| !body.is_empty() && body != "[deleted]" && body != "[removed]")?;

    Some(Comment {
        body,
        score: thing.data.score,
    })
}
