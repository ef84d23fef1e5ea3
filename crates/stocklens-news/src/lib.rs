//! NewsAPI article collector.
//!
//! Fetches the most recent articles about a stock and concatenates the first
//! ten into a single cleaned string for summarization. A non-200 response is
//! a degraded (empty) result, not an error.

mod client;
mod error;

pub use client::NewsClient;
pub use error::NewsError;
