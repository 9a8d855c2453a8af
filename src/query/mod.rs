//! Exact-term lookup against an [`InvertedIndex`].
//!
//! A search term is lowercased exactly like indexed text and then matched by
//! equality; there is no ranking and no partial matching. A term that is not
//! in the index is reported as [`QueryResult::NotFound`], which is an ordinary
//! outcome rather than an error.

pub mod searcher;
pub mod term;

use std::fmt;

use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, PostingEntry};

pub use searcher::IndexSearcher;
pub use term::TermQuery;

/// Outcome of looking up one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<'a, D = DocId> {
    /// The term is indexed; holds its posting entry.
    Found(&'a PostingEntry<D>),

    /// The normalized term does not occur in any document.
    NotFound {
        /// The normalized term that was looked up.
        term: String,
    },
}

impl<'a, D> QueryResult<'a, D> {
    /// Check whether the term was found.
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found(_))
    }

    /// The normalized term that was looked up.
    pub fn term(&self) -> &str {
        match self {
            QueryResult::Found(entry) => entry.term(),
            QueryResult::NotFound { term } => term,
        }
    }

    /// The posting entry, if the term was found.
    pub fn entry(&self) -> Option<&'a PostingEntry<D>> {
        match self {
            QueryResult::Found(entry) => Some(*entry),
            QueryResult::NotFound { .. } => None,
        }
    }

    /// Documents containing the term; empty when not found.
    pub fn document_ids(&self) -> &'a [D] {
        self.entry().map(PostingEntry::document_ids).unwrap_or(&[])
    }

    /// Number of documents containing the term; zero when not found.
    pub fn document_frequency(&self) -> usize {
        self.entry().map_or(0, PostingEntry::document_frequency)
    }
}

/// Formats the report line for a lookup.
///
/// The term shown is the normalized one, not the search term as typed, so
/// `find("HoMe")` and `find("home")` print the same line just as they compare
/// equal.
impl<D: fmt::Display> fmt::Display for QueryResult<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Found(entry) => {
                write!(f, "Found: {} in documents: [", entry.term())?;
                for (i, id) in entry.document_ids().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "]")
            }
            QueryResult::NotFound { term } => write!(f, "Not Found: {term}"),
        }
    }
}

/// Look up `search_term` in `index` after lowercasing it.
///
/// # Examples
///
/// ```
/// use lexicon::index::build_from_texts;
/// use lexicon::query::find;
///
/// let index = build_from_texts(["home sales top", "home sales rise"]);
///
/// let result = find(&index, "Sales");
/// assert_eq!(result.document_ids(), &[0, 1]);
/// assert_eq!(result.to_string(), "Found: sales in documents: [0, 1]");
///
/// let missing = find(&index, "Prices");
/// assert!(!missing.is_found());
/// assert_eq!(missing.to_string(), "Not Found: prices");
/// ```
pub fn find<'a, D>(index: &'a InvertedIndex<D>, search_term: &str) -> QueryResult<'a, D> {
    TermQuery::new(search_term).execute(index)
}
