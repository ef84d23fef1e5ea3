//! Sequential per-forum discussion collection.

use stocklens_core::clean_text;

use crate::client::RedditClient;
use crate::error::RedditError;
use crate::types::{Comment, FetchConfig, Post, Submission};

/// Collect qualifying discussions about `stock_name` from every configured forum.
///
/// Forums are traversed strictly in the configured order; within a forum,
/// submissions are processed in the order the search returned them. Each
/// qualifying submission has its top-sorted comments loaded and
/// threshold-filtered before being emitted as a [`Post`].
///
/// There is no fan-out across forums: one forum's search and comment loading
/// completes before the next forum begins.
///
/// # Errors
///
/// Any search or comment-load failure propagates and aborts the whole
/// collection — a partially fetched post list is never returned.
pub async fn fetch_discussions(
    client: &RedditClient,
    config: &FetchConfig,
    stock_name: &str,
) -> Result<Vec<Post>, RedditError> {
    let mut posts = Vec::new();

    for forum in &config.forums {
        let submissions = client
            .search_submissions(forum, stock_name, config.search_limit)
            .await?;
        tracing::debug!(
            forum = forum.as_str(),
            count = submissions.len(),
            "searched forum"
        );

        for submission in submissions {
            if !qualifies(&submission, config) {
                continue;
            }

            let comments = client.top_comments(forum, &submission.id).await?;
            let comment_text = comments
                .iter()
                .filter(|comment| comment_qualifies(comment, config))
                .map(|comment| clean_text(&comment.body))
                .collect::<Vec<_>>()
                .join(" ");

            posts.push(Post {
                title: clean_text(&submission.title),
                content: clean_text(&submission.selftext),
                comments: comment_text,
                upvotes: submission.score,
                num_comments: submission.num_comments,
                url: submission.url,
            });
        }
    }

    tracing::info!(
        stock = stock_name,
        posts = posts.len(),
        "collected qualifying discussions"
    );

    Ok(posts)
}

/// A submission qualifies when it clears both engagement thresholds and its
/// title carries no banned keyword (case-insensitive substring match).
fn qualifies(submission: &Submission, config: &FetchConfig) -> bool {
    if submission.score < config.min_post_upvotes
        || submission.num_comments < config.min_post_comments
    {
        return false;
    }

    let title = submission.title.to_lowercase();
    !config
        .banned_title_keywords
        .iter()
        .any(|keyword| title.contains(keyword.as_str()))
}

/// A comment qualifies on body length (characters) and score.
fn comment_qualifies(comment: &Comment, config: &FetchConfig) -> bool {
    comment.body.chars().count() >= config.min_comment_length
        && comment.score >= config.min_comment_upvotes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(title: &str, score: i64, num_comments: i64) -> Submission {
        Submission {
            id: "abc123".to_string(),
            title: title.to_string(),
            selftext: String::new(),
            score,
            num_comments,
            url: "https://reddit.com/r/test/abc123".to_string(),
        }
    }

    #[test]
    fn submission_qualifies_at_exact_thresholds() {
        let config = FetchConfig::default();
        assert!(qualifies(&submission("Quarterly results thread", 100, 10), &config));
    }

    #[test]
    fn submission_rejected_below_upvote_threshold() {
        let config = FetchConfig::default();
        assert!(!qualifies(&submission("Quarterly results thread", 99, 10), &config));
    }

    #[test]
    fn submission_rejected_below_comment_threshold() {
        let config = FetchConfig::default();
        assert!(!qualifies(&submission("Quarterly results thread", 100, 9), &config));
    }

    #[test]
    fn banned_keyword_rejects_regardless_of_case() {
        let config = FetchConfig::default();
        assert!(!qualifies(&submission("Best MEME stock of 2025", 500, 80), &config));
        assert!(!qualifies(&submission("lol look at this chart", 500, 80), &config));
    }

    #[test]
    fn banned_keyword_matches_as_substring() {
        let config = FetchConfig::default();
        // "lol" inside a longer word still disqualifies — substring semantics.
        assert!(!qualifies(&submission("Trololo rally incoming", 500, 80), &config));
    }

    #[test]
    fn comment_qualifies_at_exact_thresholds() {
        let config = FetchConfig::default();
        let comment = Comment {
            body: "x".repeat(30),
            score: 20,
        };
        assert!(comment_qualifies(&comment, &config));
    }

    #[test]
    fn comment_rejected_when_too_short_or_low_scored() {
        let config = FetchConfig::default();
        assert!(!comment_qualifies(
            &Comment {
                body: "x".repeat(29),
                score: 20,
            },
            &config
        ));
        assert!(!comment_qualifies(
            &Comment {
                body: "x".repeat(30),
                score: 19,
            },
            &config
        ));
    }

    #[test]
    fn comment_length_counts_characters_not_bytes() {
        let config = FetchConfig::default();
        // 30 multibyte characters, more than 30 bytes either way.
        let comment = Comment {
            body: "₹".repeat(30),
            score: 20,
        };
        assert!(comment_qualifies(&comment, &config));
    }
}
