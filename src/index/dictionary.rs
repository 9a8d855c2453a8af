//! Insertion-ordered term dictionary.
//!
//! A single container serves both existence checks and enumeration: the hash
//! table maps each term to its slot in a vector of entries, and the vector
//! keeps terms in the order they were first added. Lookups never scan.

use std::hash::Hash;

use ahash::AHashMap;

use crate::index::posting::{DocId, PostingEntry};

/// Terms and their posting entries, in first-seen order.
#[derive(Debug, Clone)]
pub struct TermDictionary<D = DocId> {
    /// Term to index in `entries`.
    slots: AHashMap<String, usize>,
    /// Entries in first-seen order.
    entries: Vec<PostingEntry<D>>,
}

impl<D> TermDictionary<D> {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        TermDictionary {
            slots: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Create with initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TermDictionary {
            slots: AHashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Add one posting for `term`. Returns `true` if the term was new.
    pub(crate) fn add_posting(&mut self, term: String, document_id: D) -> bool {
        match self.slots.get(term.as_str()) {
            Some(&slot) => {
                self.entries[slot].push(document_id);
                false
            }
            None => {
                self.slots.insert(term.clone(), self.entries.len());
                self.entries.push(PostingEntry::new(term, document_id));
                true
            }
        }
    }

    /// Mutable access to every entry, for finalization.
    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut PostingEntry<D>> {
        self.entries.iter_mut()
    }

    /// First-seen position of a term.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.slots.get(term).copied()
    }

    /// Look up a term and return its entry.
    pub fn get(&self, term: &str) -> Option<&PostingEntry<D>> {
        // A slot always points inside `entries`; a miss here is a broken
        // invariant and panics rather than reporting "not found".
        self.position(term).map(|slot| &self.entries[slot])
    }

    /// Entry at a first-seen position.
    pub fn entry_at(&self, position: usize) -> Option<&PostingEntry<D>> {
        self.entries.get(position)
    }

    /// Check if a term exists.
    pub fn contains(&self, term: &str) -> bool {
        self.slots.contains_key(term)
    }

    /// Get the number of terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, PostingEntry<D>> {
        self.entries.iter()
    }

    /// Check that the hash table and the ordered entries describe the same term set.
    pub fn is_consistent(&self) -> bool {
        self.slots.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(slot, entry)| self.slots.get(entry.term()) == Some(&slot))
    }
}

impl<D: Clone + Eq + Hash> TermDictionary<D> {
    /// Deduplicate every posting list. Returns the number of postings removed.
    pub(crate) fn dedup_postings(&mut self) -> usize {
        self.entries_mut().map(PostingEntry::dedup).sum()
    }
}

impl<D> Default for TermDictionary<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut dict: TermDictionary = TermDictionary::new();
        assert!(dict.add_posting("home".to_string(), 0));
        assert!(dict.add_posting("sales".to_string(), 0));
        assert!(!dict.add_posting("home".to_string(), 1));

        let home = dict.get("home").unwrap();
        assert_eq!(home.document_frequency(), 2);
        assert_eq!(home.document_ids(), &[0, 1]);
        assert!(dict.get("rise").is_none());
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let mut dict: TermDictionary = TermDictionary::with_capacity(4);
        for (term, doc) in [("top", 0), ("home", 0), ("top", 1), ("rise", 1)] {
            dict.add_posting(term.to_string(), doc);
        }

        let terms: Vec<&str> = dict.iter().map(|e| e.term()).collect();
        assert_eq!(terms, vec!["top", "home", "rise"]);
        assert_eq!(dict.position("home"), Some(1));
        assert_eq!(dict.position("missing"), None);
        assert_eq!(dict.entry_at(2).map(|e| e.term()), Some("rise"));
        assert!(dict.entry_at(3).is_none());
    }

    #[test]
    fn test_dedup_postings() {
        let mut dict: TermDictionary = TermDictionary::new();
        for (term, doc) in [("a", 1), ("a", 1), ("b", 2), ("a", 2), ("b", 2)] {
            dict.add_posting(term.to_string(), doc);
        }

        assert_eq!(dict.dedup_postings(), 2);
        assert_eq!(dict.get("a").unwrap().document_ids(), &[1, 2]);
        assert_eq!(dict.get("b").unwrap().document_frequency(), 1);
        assert!(dict.is_consistent());
    }

    #[test]
    fn test_empty() {
        let dict: TermDictionary = TermDictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("anything"));
        assert!(dict.is_consistent());
    }
}
