//! Fail-soft summarization on top of [`GeminiClient`].

use crate::client::GeminiClient;

/// Input text beyond this many characters is dropped before prompting.
const MAX_INPUT_CHARS: usize = 8000;

/// Summarize `text` as discussion about `stock_name`.
///
/// Truncates the input to its first 8000 characters, prepends the fixed
/// instruction prompt, and asks the model. Never fails: any model error is
/// absorbed into a descriptive `Error in sentiment analysis: ...` string so
/// that one failed summarization cannot abort the overall response.
pub async fn summarize(client: &GeminiClient, text: &str, stock_name: &str) -> String {
    let trimmed = truncate_chars(text, MAX_INPUT_CHARS);
    let prompt = build_prompt(stock_name);

    match client.generate(&format!("{prompt} {trimmed}")).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(
                stock = stock_name,
                error = %e,
                "summarization failed, absorbing into payload"
            );
            format!("Error in sentiment analysis: {e}")
        }
    }
}

fn build_prompt(stock_name: &str) -> String {
    format!(
        "The broader discussion related to {stock_name} should be summarized with a focus on \
         key trends, opinions, and risks. Make sure to analyze posts and comments together for \
         a more informed perspective. If there is no relevant discussion specifically about \
         {stock_name}, then summarize the discussions about its peer companies or industry \
         trends. If no such discussions exist, clearly state that this stock is not widely \
         discussed, and no insights are available."
    )
}

/// Char-accurate prefix of `input`, at most `max_chars` characters.
fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_not_truncated() {
        assert_eq!(truncate_chars("hello", 8000), "hello");
    }

    #[test]
    fn input_at_the_limit_is_kept_whole() {
        let input = "x".repeat(8000);
        assert_eq!(truncate_chars(&input, 8000).chars().count(), 8000);
    }

    #[test]
    fn over_limit_input_is_cut_to_exactly_the_limit() {
        let input = "x".repeat(8001);
        assert_eq!(truncate_chars(&input, 8000).chars().count(), 8000);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let input = "₹".repeat(8100);
        let trimmed = truncate_chars(&input, 8000);
        assert_eq!(trimmed.chars().count(), 8000);
        assert!(input.is_char_boundary(trimmed.len()));
    }

    #[test]
    fn prompt_interpolates_the_stock_name() {
        let prompt = build_prompt("TATASTEEL");
        assert!(prompt.contains("related to TATASTEEL"));
        assert!(prompt.contains("specifically about TATASTEEL"));
        assert!(prompt.contains("key trends, opinions, and risks"));
    }
}
