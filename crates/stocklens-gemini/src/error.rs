use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("No response from Gemini.")]
    EmptyResponse,
}
