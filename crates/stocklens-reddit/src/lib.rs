//! Reddit discussion collector (client-credentials OAuth).
//!
//! Searches a fixed list of stock-market forums for submissions about a stock,
//! keeps the ones that clear the engagement thresholds, and folds their
//! top-voted comments into [`Post`] records for summarization.

mod client;
mod error;
mod fetcher;
mod types;

pub use client::RedditClient;
pub use error::RedditError;
pub use fetcher::fetch_discussions;
pub use types::{Comment, FetchConfig, Post, Submission};
