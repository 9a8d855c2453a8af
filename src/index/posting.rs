//! Posting entries: one term's occurrences across the corpus.

use std::hash::Hash;

use ahash::AHashSet;
use serde::Serialize;

/// Identifier assigned to documents indexed from raw text (their zero-based position).
pub type DocId = u64;

/// A term together with the documents that contain it.
///
/// Once the entry belongs to a finished [`InvertedIndex`](super::InvertedIndex),
/// `document_frequency() == document_ids().len()` and no identifier appears twice.
/// The identifiers are kept in the order their postings were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingEntry<D = DocId> {
    term: String,
    document_frequency: usize,
    document_ids: Vec<D>,
}

impl<D> PostingEntry<D> {
    /// Start an entry for a term seen for the first time.
    pub(crate) fn new(term: String, document_id: D) -> Self {
        PostingEntry {
            term,
            document_frequency: 1,
            document_ids: vec![document_id],
        }
    }

    /// Record one more posting. Repeated ids are only collapsed by `dedup`.
    pub(crate) fn push(&mut self, document_id: D) {
        self.document_frequency += 1;
        self.document_ids.push(document_id);
    }

    /// The normalized term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Number of distinct documents containing the term.
    pub fn document_frequency(&self) -> usize {
        self.document_frequency
    }

    /// Documents containing the term, in first-posting order.
    pub fn document_ids(&self) -> &[D] {
        &self.document_ids
    }

    /// Check whether `document_id` is in the posting list.
    pub fn contains(&self, document_id: &D) -> bool
    where
        D: PartialEq,
    {
        self.document_ids.contains(document_id)
    }

    /// Sort the posting list in ascending identifier order.
    pub(crate) fn sort_ids(&mut self)
    where
        D: Ord,
    {
        self.document_ids.sort_unstable();
    }
}

impl<D: Clone + Eq + Hash> PostingEntry<D> {
    /// Drop repeated document ids, keeping first occurrences, and recompute
    /// the document frequency. Returns how many postings were removed.
    pub(crate) fn dedup(&mut self) -> usize {
        let before = self.document_ids.len();
        let mut seen = AHashSet::with_capacity(before);
        self.document_ids.retain(|id| seen.insert(id.clone()));
        self.document_frequency = self.document_ids.len();
        before - self.document_frequency
    }
}
