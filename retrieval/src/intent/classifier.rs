use std::sync::LazyLock;

use codesearch_core::QueryIntent;
use regex::Regex;

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9]*_[A-Za-z0-9_]+").unwrap());
static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+[A-Z][A-Za-z0-9]*\b|\b[A-Z][a-z0-9]+[A-Z][A-Za-z0-9]*\b").unwrap());
static SCOPE_OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"::|->|\w\.\w").unwrap());
static CODE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(def|class|fn|function)\b").unwrap());

static QUESTION_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(who|what|where|why|how)\b").unwrap());
static TO_INFINITIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bto\s+[a-z]+\b").unwrap());
static LOWERCASE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z ]{3,}[a-z]$").unwrap());

/// Classifies a query string into {KEYWORD, SEMANTIC, MIXED} (spec §4.1).
///
/// Applies the code-token and natural-language-signal heuristics in order and
/// combines them; a very short single token with neither signal defaults to
/// KEYWORD.
pub fn classify(query: &str) -> QueryIntent {
    let trimmed = query.trim();

    let has_code_tokens = SNAKE_CASE.is_match(trimmed)
        || CAMEL_CASE.is_match(trimmed)
        || SCOPE_OPERATOR.is_match(trimmed)
        || CODE_KEYWORD.is_match(trimmed);

    let has_nl_tokens = QUESTION_WORD.is_match(trimmed)
        || TO_INFINITIVE.is_match(trimmed)
        || LOWERCASE_PHRASE.is_match(trimmed);

    match (has_code_tokens, has_nl_tokens) {
        (true, true) => QueryIntent::Mixed,
        (true, false) => QueryIntent::Keyword,
        (false, true) => QueryIntent::Semantic,
        (false, false) => QueryIntent::Keyword,
    }
}
