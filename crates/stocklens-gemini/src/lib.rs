//! Gemini summarization.
//!
//! Thin `generateContent` client plus the fail-soft summarizer: a failed model
//! call never aborts the request, it becomes a descriptive error string in the
//! response payload instead.

mod client;
mod error;
mod summarizer;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use summarizer::summarize;
