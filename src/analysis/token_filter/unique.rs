//! Unique filter implementation.
//!
//! Removes repeated tokens from one document so that it contributes each of
//! its terms once. The first occurrence wins and the relative order of
//! survivors is unchanged.

use ahash::AHashSet;

/// A filter that keeps only the first occurrence of each token.
///
/// Comparison is exact, so place it after [`LowercaseFilter`](super::LowercaseFilter)
/// when case variants should collapse.
///
/// # Examples
///
/// ```
/// use lexicon::analysis::token_filter::UniqueFilter;
///
/// let filter = UniqueFilter::new();
/// let terms = filter.dedup(["in", "home", "in"].map(String::from));
/// assert_eq!(terms, vec!["in", "home"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    /// Create a new unique filter.
    pub fn new() -> Self {
        UniqueFilter
    }

    /// Drop every token that was already seen earlier in `tokens`.
    pub fn dedup<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = AHashSet::new();
        tokens
            .into_iter()
            .filter(|token| seen.insert(token.clone()))
            .collect()
    }
}
