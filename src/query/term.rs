//! Term query implementation for exact term matching.

use crate::analysis::normalize;
use crate::index::inverted::InvertedIndex;
use crate::query::QueryResult;

/// A query for one exact term.
///
/// The term is normalized when the query is created, so executing it is a
/// single hash lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    /// The normalized term to search for.
    term: String,
}

impl TermQuery {
    /// Create a new term query, lowercasing `search_term`.
    pub fn new<S: AsRef<str>>(search_term: S) -> Self {
        TermQuery {
            term: normalize(search_term.as_ref()),
        }
    }

    /// Get the normalized term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Run the query against `index`.
    pub fn execute<'a, D>(&self, index: &'a InvertedIndex<D>) -> QueryResult<'a, D> {
        match index.get(&self.term) {
            Some(entry) => QueryResult::Found(entry),
            None => QueryResult::NotFound {
                term: self.term.clone(),
            },
        }
    }
}
