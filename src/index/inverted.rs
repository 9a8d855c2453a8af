//! The finished, read-only inverted index.

use serde::Serialize;

use crate::index::dictionary::TermDictionary;
use crate::index::posting::{DocId, PostingEntry};
use crate::query::{self, QueryResult};

/// Statistics about an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of documents added to the builder, including ones with no
    /// terms. A caller id passed to several `add_terms` calls counts each time.
    pub doc_count: usize,

    /// Number of distinct terms.
    pub term_count: usize,

    /// Total number of (term, document) postings.
    pub posting_count: usize,
}

/// An immutable mapping from term to [`PostingEntry`].
///
/// Produced by an [`IndexBuilder`](super::IndexBuilder). Every term appears
/// exactly once, enumeration follows first-insertion order, and every posting
/// list is duplicate-free.
///
/// # Examples
///
/// ```
/// use lexicon::index::build_from_texts;
///
/// let index = build_from_texts(["home sales", "home prices"]);
///
/// let home = index.get("home").unwrap();
/// assert_eq!(home.document_frequency(), 2);
/// assert_eq!(home.document_ids(), &[0, 1]);
///
/// let terms: Vec<&str> = index.terms().collect();
/// assert_eq!(terms, vec!["home", "sales", "prices"]);
/// ```
#[derive(Debug, Clone)]
pub struct InvertedIndex<D = DocId> {
    dictionary: TermDictionary<D>,
    doc_count: usize,
}

impl<D> InvertedIndex<D> {
    pub(crate) fn from_parts(dictionary: TermDictionary<D>, doc_count: usize) -> Self {
        InvertedIndex {
            dictionary,
            doc_count,
        }
    }

    /// An index built from zero documents.
    pub fn empty() -> Self {
        InvertedIndex::from_parts(TermDictionary::new(), 0)
    }

    /// Look up an already-normalized term.
    ///
    /// Use [`find`](Self::find) for user input; it applies the same
    /// lowercasing as indexing.
    pub fn get(&self, term: &str) -> Option<&PostingEntry<D>> {
        self.dictionary.get(term)
    }

    /// Normalize `search_term` and look it up.
    pub fn find(&self, search_term: &str) -> QueryResult<'_, D> {
        query::find(self, search_term)
    }

    /// Check whether an already-normalized term is indexed.
    pub fn contains(&self, term: &str) -> bool {
        self.dictionary.contains(term)
    }

    /// First-insertion position of an already-normalized term.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.dictionary.position(term)
    }

    /// Entry at a first-insertion position.
    pub fn entry_at(&self, position: usize) -> Option<&PostingEntry<D>> {
        self.dictionary.entry_at(position)
    }

    /// Iterate over entries in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PostingEntry<D>> {
        self.dictionary.iter()
    }

    /// Iterate over terms in first-insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.iter().map(PostingEntry::term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Check if the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Number of documents added to the builder (see [`IndexStats::doc_count`]).
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// The underlying term dictionary.
    pub fn dictionary(&self) -> &TermDictionary<D> {
        &self.dictionary
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.len(),
            posting_count: self.iter().map(PostingEntry::document_frequency).sum(),
        }
    }
}

impl<D> Default for InvertedIndex<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, D> IntoIterator for &'a InvertedIndex<D> {
    type Item = &'a PostingEntry<D>;
    type IntoIter = std::slice::Iter<'a, PostingEntry<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
