/// Collapse every whitespace run (including newlines) into a single space and
/// trim leading/trailing whitespace.
#[must_use]
pub fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
