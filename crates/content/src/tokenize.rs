//! Tokenization for movie overviews.
//!
//! Overviews become lowercase alphanumeric tokens of at least two
//! characters, with English stop words removed. Terms are the tokens
//! themselves plus two-word phrases over consecutive surviving tokens,
//! so "new york" style collocations get their own vocabulary entry.

use crate::stopwords::is_stop_word;

/// Split `text` into lowercase content tokens (stop words removed,
/// single characters dropped).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Expand `text` into vectorizer terms: unigrams plus bigrams over
/// consecutive tokens.
pub fn terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let bigrams: Vec<String> = tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();
    let mut terms = tokens;
    terms.extend(bigrams);
    terms
}
