use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use stocklens_gemini::summarize;
use stocklens_reddit::{fetch_discussions, Post};

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub reddit_summary: String,
    pub news_summary: String,
}

/// Fetch discussion and news for `stock_name`, summarize both, and return the
/// two markdown-formatted summaries.
///
/// Strictly sequential: the discussion fetch completes before the news fetch
/// is issued, and the discussion summary before the news summary. Summarizer
/// failures are absorbed into the payload; data-acquisition failures abort
/// the request with a structured 500.
pub async fn analyze_stock(
    State(state): State<AppState>,
    Path(stock_name): Path<String>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let posts = fetch_discussions(&state.reddit, &state.fetch_config, &stock_name)
        .await
        .map_err(|e| {
            tracing::warn!(stock = stock_name.as_str(), error = %e, "discussion fetch failed");
            ApiError::new("upstream_failure", "discussion fetch failed")
        })?;

    let news_text = state
        .news
        .fetch_combined_text(&stock_name)
        .await
        .map_err(|e| {
            tracing::warn!(stock = stock_name.as_str(), error = %e, "news fetch failed");
            ApiError::new("upstream_failure", "news fetch failed")
        })?;

    let discussion_text = combine_posts(&posts);
    let reddit_summary = summarize(&state.gemini, &discussion_text, &stock_name).await;
    let news_summary = summarize(&state.gemini, &news_text, &stock_name).await;

    Ok(Json(AnalyzeResponse {
        reddit_summary: format!("## Reddit Discussion Summary\n\n**{reddit_summary}**\n"),
        news_summary: format!("## News Summary\n\n**{news_summary}**\n"),
    }))
}

/// Title, content, and comment text of every post, joined with single spaces.
fn combine_posts(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|post| format!("{} {} {}", post.title, post.content, post.comments))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str, comments: &str) -> Post {
        Post {
            title: title.to_string(),
            content: content.to_string(),
            comments: comments.to_string(),
            upvotes: 150,
            num_comments: 20,
            url: "https://reddit.com/r/test/abc".to_string(),
        }
    }

    #[test]
    fn combine_posts_joins_title_content_and_comments() {
        let posts = vec![
            post("First title", "first body", "first comments"),
            post("Second title", "second body", "second comments"),
        ];
        assert_eq!(
            combine_posts(&posts),
            "First title first body first comments Second title second body second comments"
        );
    }

    #[test]
    fn combine_posts_of_empty_list_is_empty() {
        assert_eq!(combine_posts(&[]), "");
    }
}
