//! Searcher holding a shared, finished index.

use std::sync::Arc;

use log::debug;

use crate::analysis::TermAnalyzer;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;
use crate::query::QueryResult;
use crate::query::term::TermQuery;

/// Answers term lookups against a shared [`InvertedIndex`].
///
/// Cloning a searcher is cheap and clones share the index, so one can be
/// handed to each reader thread.
///
/// # Examples
///
/// ```
/// use lexicon::index::build_from_texts;
/// use lexicon::query::IndexSearcher;
///
/// let searcher = IndexSearcher::new(build_from_texts(["home sales", "home rise"]));
///
/// let results = searcher.find_text("Home PRICES home");
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].document_ids(), &[0, 1]);
/// assert!(!results[1].is_found());
/// ```
#[derive(Debug)]
pub struct IndexSearcher<D = DocId> {
    /// The index to search against.
    index: Arc<InvertedIndex<D>>,
    analyzer: TermAnalyzer,
}

impl<D> IndexSearcher<D> {
    /// Create a new searcher that owns `index`.
    pub fn new(index: InvertedIndex<D>) -> Self {
        Self::from_arc(Arc::new(index))
    }

    /// Create a new searcher over an already shared index.
    pub fn from_arc(index: Arc<InvertedIndex<D>>) -> Self {
        IndexSearcher {
            index,
            analyzer: TermAnalyzer::new(),
        }
    }

    /// Get the index.
    pub fn index(&self) -> &Arc<InvertedIndex<D>> {
        &self.index
    }

    /// Look up a single term.
    pub fn find(&self, search_term: &str) -> QueryResult<'_, D> {
        let query = TermQuery::new(search_term);
        let result = query.execute(&self.index);
        debug!(
            "Term query {:?}: {} documents",
            query.term(),
            result.document_frequency()
        );
        result
    }

    /// Look up each term independently, in the given order.
    pub fn find_all<I, S>(&self, search_terms: I) -> Vec<QueryResult<'_, D>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        search_terms
            .into_iter()
            .map(|term| self.find(term.as_ref()))
            .collect()
    }

    /// Split `text` like a document and look up each distinct term.
    pub fn find_text(&self, text: &str) -> Vec<QueryResult<'_, D>> {
        self.find_all(self.analyzer.terms(text))
    }
}

impl<D> Clone for IndexSearcher<D> {
    fn clone(&self) -> Self {
        IndexSearcher {
            index: Arc::clone(&self.index),
            analyzer: self.analyzer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::index::builder::build_from_texts;

    #[test]
    fn test_find_all_keeps_order() {
        let searcher = IndexSearcher::new(build_from_texts(["a b", "b c"]));

        let results = searcher.find_all(["C", "missing", "b"]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].document_ids(), &[1]);
        assert!(!results[1].is_found());
        assert_eq!(results[2].document_ids(), &[0, 1]);
    }

    #[test]
    fn test_find_text_deduplicates_terms() {
        let searcher = IndexSearcher::new(build_from_texts(["home sales"]));

        let results = searcher.find_text("HOME home Home");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].term(), "home");
    }

    #[test]
    fn test_find_text_empty() {
        let searcher = IndexSearcher::new(build_from_texts(["home"]));
        assert!(searcher.find_text("   ").is_empty());
    }

    #[test]
    fn test_clones_share_index_across_threads() {
        let searcher = IndexSearcher::new(build_from_texts(["home sales", "sales rise"]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let searcher = searcher.clone();
                thread::spawn(move || {
                    let ids = searcher.find("SALES").document_ids().to_vec();
                    ids
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![0, 1]);
        }
        assert_eq!(Arc::strong_count(searcher.index()), 1);
    }
}
