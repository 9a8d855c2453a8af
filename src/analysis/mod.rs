//! Text analysis module for lexicon.
//!
//! This module turns raw document text into index terms. The pipeline is a
//! tokenizer followed by a chain of token filters:
//!
//! ```text
//! "Home sales HOME"
//!     → WhitespaceTokenizer → ["Home", "sales", "HOME"]
//!     → LowercaseFilter     → ["home", "sales", "home"]
//!     → UniqueFilter        → ["home", "sales"]
//! ```
//!
//! [`tokenize`] runs the default pipeline and returns plain term strings.

pub mod analyzer;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token_filter::*;
pub use tokenizer::*;

/// Split `text` into normalized terms, each appearing once, in first-occurrence order.
///
/// This is the tokenization used when building an index from raw text and it
/// never fails: empty or all-whitespace input yields an empty vector.
///
/// # Examples
///
/// ```
/// use lexicon::analysis::tokenize;
///
/// let terms = tokenize("new home sales top forecasts NEW");
/// assert_eq!(terms, vec!["new", "home", "sales", "top", "forecasts"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    TermAnalyzer::new().terms(text)
}

/// Lowercase a single search term the same way indexed terms are normalized.
pub fn normalize(term: &str) -> String {
    LowercaseFilter::new().normalize(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_document() {
        let terms = tokenize("new home sales top forecasts NEW");
        assert_eq!(terms, vec!["new", "home", "sales", "top", "forecasts"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_case_variants_agree() {
        assert_eq!(
            tokenize("Home SALES rise"),
            tokenize("hOME sales RISE")
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Sales"), "sales");
        assert_eq!(normalize("ÉCOLE"), "école");
    }
}
