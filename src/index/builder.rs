//! Index construction.
//!
//! [`IndexBuilder`] owns a mutable [`TermDictionary`] while documents are
//! added and turns it into an immutable [`InvertedIndex`] in
//! [`finish`](IndexBuilder::finish).
//!
//! Postings are accumulated naively: adding the same term for the same
//! document twice counts it twice. `finish` always runs a finalization pass
//! that removes repeated document ids from every posting list and recomputes
//! the document frequency, so the finished index is correct whichever way it
//! was fed.

use std::hash::Hash;

use log::{debug, info, trace};

use crate::analysis::TermAnalyzer;
use crate::error::Result;
use crate::index::config::IndexConfig;
use crate::index::dictionary::TermDictionary;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;

/// Accumulates postings and produces an [`InvertedIndex`].
///
/// # Examples
///
/// ```
/// use lexicon::index::IndexBuilder;
///
/// let mut builder = IndexBuilder::new();
/// builder.add_text("home sales top forecasts");
/// builder.add_text("home sales rise in July");
/// let index = builder.finish();
///
/// assert_eq!(index.get("home").unwrap().document_ids(), &[0, 1]);
/// assert_eq!(index.get("july").unwrap().document_ids(), &[1]);
/// ```
#[derive(Debug)]
pub struct IndexBuilder<D = DocId> {
    config: IndexConfig,
    analyzer: TermAnalyzer,
    dictionary: TermDictionary<D>,
    doc_count: usize,
    posting_count: usize,
}

impl<D> IndexBuilder<D> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(IndexConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: IndexConfig) -> Self {
        IndexBuilder {
            dictionary: TermDictionary::with_capacity(config.expected_terms),
            analyzer: TermAnalyzer::new(),
            config,
            doc_count: 0,
            posting_count: 0,
        }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Number of documents added so far: one per `add_text` or `add_terms`
    /// call, so a repeated caller id is counted again.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms seen so far.
    pub fn term_count(&self) -> usize {
        self.dictionary.len()
    }

    fn document_added(&mut self) {
        self.doc_count += 1;

        let interval = self.config.progress_interval;
        if interval > 0 && self.doc_count % interval == 0 {
            info!(
                "Indexed {} documents ({} terms, {} postings)",
                self.doc_count,
                self.dictionary.len(),
                self.posting_count
            );
        }
    }
}

impl<D: Clone + Eq + Hash> IndexBuilder<D> {
    /// Record that `document_id` contains `term`.
    ///
    /// An unseen term gets a new entry at the end of the first-seen order; a
    /// known term has its frequency incremented and the id appended. The term
    /// is stored as given, so callers passing raw input should normalize it
    /// first (see [`add_terms`](Self::add_terms)).
    pub fn add_posting<S: Into<String>>(&mut self, term: S, document_id: D) {
        if self.dictionary.add_posting(term.into(), document_id) {
            trace!("New term at position {}", self.dictionary.len() - 1);
        }
        self.posting_count += 1;
    }

    /// Add one document given as already-tokenized terms.
    ///
    /// Terms are lowercased but otherwise used as-is: they are not split and
    /// repeats within the document are not removed here. Each (id, term) pair
    /// becomes one posting; repeats are collapsed by [`finish`](Self::finish).
    /// Empty terms are skipped, as whitespace splitting never produces them.
    ///
    /// Every call counts as one document in [`doc_count`](Self::doc_count),
    /// even when `document_id` was already used by an earlier call.
    pub fn add_terms<I, S>(&mut self, document_id: D, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            let term = term.into();
            if term.is_empty() {
                continue;
            }
            let normalized = self.analyzer.normalize(&term);
            self.add_posting(normalized, document_id.clone());
        }
        self.document_added();
    }

    /// Run the finalization pass and return the immutable index.
    pub fn finish(mut self) -> InvertedIndex<D> {
        let removed = self.dictionary.dedup_postings();
        debug!(
            "Built index: {} documents, {} terms, {} postings ({} repeated postings removed)",
            self.doc_count,
            self.dictionary.len(),
            self.posting_count - removed,
            removed
        );
        InvertedIndex::from_parts(self.dictionary, self.doc_count)
    }
}

impl<D: Clone + Eq + Hash + Ord> IndexBuilder<D> {
    /// Like [`finish`](Self::finish), and also sort every posting list by id.
    pub fn finish_sorted(mut self) -> InvertedIndex<D> {
        for entry in self.dictionary.entries_mut() {
            entry.sort_ids();
        }
        self.finish()
    }
}

impl IndexBuilder<DocId> {
    /// Tokenize `text` and add it as the next document.
    ///
    /// The document's id is its zero-based position among the documents
    /// added to this builder. Tokenization already removes repeated terms, so
    /// each term contributes exactly one posting.
    pub fn add_text(&mut self, text: &str) -> DocId {
        let document_id = self.doc_count as DocId;
        for term in self.analyzer.terms(text) {
            self.add_posting(term, document_id);
        }
        self.document_added();
        document_id
    }
}

impl<D> Default for IndexBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an index from raw document texts, numbering documents from zero.
///
/// # Examples
///
/// ```
/// use lexicon::index::build_from_texts;
///
/// let index = build_from_texts([
///     "new home sales top forecasts",
///     "home sales rise in July",
///     "increase in home sales in July",
/// ]);
///
/// let home = index.get("home").unwrap();
/// assert_eq!(home.document_frequency(), 3);
/// assert_eq!(home.document_ids(), &[0, 1, 2]);
/// ```
pub fn build_from_texts<I, S>(texts: I) -> InvertedIndex<DocId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = IndexBuilder::new();
    for text in texts {
        builder.add_text(text.as_ref());
    }
    builder.finish()
}

/// Build an index from pre-tokenized documents keyed by caller-chosen ids.
///
/// Documents are visited in the iteration order of `documents`, which fixes
/// the first-seen order of terms. Pass a `BTreeMap` or a `Vec` of pairs when
/// that order must be reproducible.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use lexicon::index::build_from_terms;
///
/// let mut docs = BTreeMap::new();
/// docs.insert(1, vec!["1001", "1002"]);
/// docs.insert(23, vec!["1001", "1003"]);
///
/// let index = build_from_terms(docs);
/// assert_eq!(index.get("1001").unwrap().document_ids(), &[1, 23]);
/// assert_eq!(index.get("1003").unwrap().document_frequency(), 1);
/// ```
pub fn build_from_terms<D, I, T, S>(documents: I) -> InvertedIndex<D>
where
    D: Clone + Eq + Hash,
    I: IntoIterator<Item = (D, T)>,
    T: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = IndexBuilder::new();
    for (document_id, terms) in documents {
        builder.add_terms(document_id, terms);
    }
    builder.finish()
}
