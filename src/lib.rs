//! # Lexicon
//!
//! An in-memory inverted index: map each term to the documents that
//! contain it, then answer exact-term lookups.
//!
//! Indexes are built in one of two ways:
//!
//! - from raw document texts, which are split on whitespace, lowercased and
//!   deduplicated per document, with each document identified by its
//!   zero-based position ([`build_from_texts`](index::build_from_texts));
//! - from caller-supplied `(document id, terms)` pairs with arbitrary
//!   hashable identifiers ([`build_from_terms`](index::build_from_terms)).
//!
//! A finished [`InvertedIndex`](index::InvertedIndex) is immutable and can be
//! shared freely between reader threads.
//!
//! ```
//! use lexicon::prelude::*;
//!
//! let index = build_from_texts([
//!     "new home sales top forecasts",
//!     "home sales rise in july",
//! ]);
//!
//! assert_eq!(index.find("Home").document_ids(), &[0, 1]);
//! assert!(!index.find("prices").is_found());
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;

pub mod prelude {
    pub use crate::analysis::{normalize, tokenize};
    pub use crate::error::{LexiconError, Result};
    pub use crate::index::{
        DocId, IndexBuilder, IndexConfig, IndexStats, InvertedIndex, PostingEntry, SharedIndex,
        build_from_terms, build_from_texts,
    };
    pub use crate::query::{IndexSearcher, QueryResult, find};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
