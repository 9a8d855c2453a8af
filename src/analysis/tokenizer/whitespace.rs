//! Whitespace tokenizer implementation.

use std::str::SplitWhitespace;

/// A tokenizer that splits text on runs of whitespace.
///
/// Whitespace is anything with the Unicode `White_Space` property, so tabs,
/// newlines and non-breaking spaces separate tokens as well. Tokens are the
/// maximal runs of non-whitespace characters, punctuation included.
///
/// # Examples
///
/// ```
/// use lexicon::analysis::tokenizer::WhitespaceTokenizer;
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<&str> = tokenizer.tokens("Hello  world").collect();
/// assert_eq!(tokens, vec!["Hello", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` into tokens borrowed from it. Empty input gives no tokens.
    pub fn tokens<'a>(&self, text: &'a str) -> SplitWhitespace<'a> {
        text.split_whitespace()
    }
}
