//! The analyzer used to turn document text into index terms.

use crate::analysis::token_filter::{LowercaseFilter, UniqueFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;

/// Whitespace tokenization, lowercasing, then per-document deduplication.
///
/// # Examples
///
/// ```
/// use lexicon::analysis::analyzer::TermAnalyzer;
///
/// let analyzer = TermAnalyzer::new();
/// assert_eq!(
///     analyzer.terms("increase in home SALES in July"),
///     vec!["increase", "in", "home", "sales", "july"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TermAnalyzer {
    tokenizer: WhitespaceTokenizer,
    lowercase: LowercaseFilter,
    unique: UniqueFilter,
}

impl TermAnalyzer {
    /// Create the default term analyzer.
    pub fn new() -> Self {
        TermAnalyzer::default()
    }

    /// Analyze `text` into distinct normalized terms in first-occurrence order.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let lowered = self
            .tokenizer
            .tokens(text)
            .map(|token| self.lowercase.normalize(token));

        self.unique.dedup(lowered)
    }

    /// Normalize a single search term.
    pub fn normalize(&self, term: &str) -> String {
        self.lowercase.normalize(term)
    }
}
