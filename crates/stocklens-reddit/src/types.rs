use serde::{Deserialize, Serialize};

/// Forums searched for stock discussion, in traversal order.
const DEFAULT_FORUMS: [&str; 6] = [
    "IndianStockMarket",
    "DalalStreetTalks",
    "StockMarketIndia",
    "IndianStreetBets",
    "NSEBets",
    "ShareMarketupdates",
];

/// Title keywords that mark a submission as low-effort (matched
/// case-insensitively as substrings of the title).
const LOW_EFFORT_KEYWORDS: [&str; 7] = ["meme", "joke", "funny", "shitpost", "lol", "haha", "troll"];

/// Targeting parameters for the discussion fetcher.
///
/// Process-wide and never mutated at runtime; constructed explicitly so tests
/// can override forums and thresholds.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Forum names, searched strictly in this order.
    pub forums: Vec<String>,
    /// Maximum submissions requested per forum search.
    pub search_limit: usize,
    /// Minimum submission score for inclusion.
    pub min_post_upvotes: i64,
    /// Minimum submission comment count for inclusion.
    pub min_post_comments: i64,
    /// Minimum comment score for inclusion in a post's comment text.
    pub min_comment_upvotes: i64,
    /// Minimum comment body length (characters) for inclusion.
    pub min_comment_length: usize,
    /// Lowercase keywords that disqualify a submission by title.
    pub banned_title_keywords: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            forums: DEFAULT_FORUMS.iter().map(ToString::to_string).collect(),
            search_limit: 50,
            min_post_upvotes: 100,
            min_post_comments: 10,
            min_comment_upvotes: 20,
            min_comment_length: 30,
            banned_title_keywords: LOW_EFFORT_KEYWORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A qualifying submission with its qualifying comments folded in.
///
/// Request-scoped; discarded once the response is built.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    /// Cleaned bodies of qualifying comments, joined with single spaces.
    pub comments: String,
    pub upvotes: i64,
    pub num_comments: i64,
    pub url: String,
}

/// A submission returned by a forum search, before qualification.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub score: i64,
    pub num_comments: i64,
    pub url: String,
}

/// A top-level comment on a submission.
#[derive(Debug, Clone)]
pub struct Comment {
    pub body: String,
    pub score: i64,
}

/// Reddit listing envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub(crate) children: Vec<Thing>,
}

/// A `kind`-tagged listing child. `t3` is a submission, `t1` a comment,
/// `more` a collapsed-comment stub.
#[derive(Debug, Deserialize)]
pub(crate) struct Thing {
    pub(crate) kind: String,
    pub(crate) data: ThingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThingData {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) selftext: Option<String>,
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) score: i64,
    #[serde(default)]
    pub(crate) num_comments: i64,
    pub(crate) permalink: Option<String>,
    pub(crate) url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_targeting_parameters() {
        let config = FetchConfig::default();
        assert_eq!(config.forums.len(), 6);
        assert_eq!(config.forums[0], "IndianStockMarket");
        assert_eq!(config.forums[5], "ShareMarketupdates");
        assert_eq!(config.search_limit, 50);
        assert_eq!(config.min_post_upvotes, 100);
        assert_eq!(config.min_post_comments, 10);
        assert_eq!(config.min_comment_upvotes, 20);
        assert_eq!(config.min_comment_length, 30);
        assert!(config
            .banned_title_keywords
            .iter()
            .any(|k| k == "shitpost"));
    }
}
