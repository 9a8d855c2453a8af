//! Lowercase filter implementation.
//!
//! Lowercasing is the only normalization lexicon applies, and it is applied
//! identically to indexed text and to search terms, which is what makes
//! lookups case-insensitive.

/// A filter that converts tokens to lowercase.
///
/// ASCII text takes a byte-wise fast path; anything else goes through the
/// Unicode-aware `str::to_lowercase`.
///
/// # Examples
///
/// ```
/// use lexicon::analysis::token_filter::LowercaseFilter;
///
/// let filter = LowercaseFilter::new();
/// assert_eq!(filter.normalize("Hello"), "hello");
/// assert_eq!(filter.normalize("ÉCOLE"), "école");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    /// Lowercase a single piece of text.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();

        assert_eq!(filter.normalize("Hello"), "hello");
        assert_eq!(filter.normalize("WORLD"), "world");
        assert_eq!(filter.normalize("sales"), "sales");
        assert_eq!(filter.normalize(""), "");
    }

    #[test]
    fn test_non_ascii() {
        let filter = LowercaseFilter::new();
        assert_eq!(filter.normalize("ÀÉÎ"), "àéî");
        assert_eq!(filter.normalize("ΣΟΦΙΑ"), "σοφια");
    }
}
