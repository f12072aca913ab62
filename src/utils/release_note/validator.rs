// release note exemptions

use regex::Regex;
use std::sync::LazyLock;

// a pair of backticks on a single line, shortest match
static CODE_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`.*?`").unwrap());

/// check if a sentence carries an inline code span
pub fn contains_code_span(sentence: &str) -> bool {
    CODE_SPAN_REGEX.is_match(sentence)
}

/// check if a sentence has nothing worth classifying
pub fn is_blank(sentence: &str) -> bool {
    sentence.trim().is_empty()
}
