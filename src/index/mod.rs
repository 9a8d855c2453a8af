//! In-memory inverted index.
//!
//! An index maps each distinct term to a [`PostingEntry`]: the number of
//! documents containing the term and their identifiers. Indexes are built
//! with an [`IndexBuilder`] and are immutable afterwards.
//!
//! Two construction modes are provided:
//!
//! - [`build_from_texts`] tokenizes raw document texts and numbers the
//!   documents by position.
//! - [`build_from_terms`] takes already-tokenized terms keyed by caller-chosen
//!   document identifiers.
//!
//! Both run the same finalization pass, so every posting list is
//! duplicate-free and every document frequency equals its list length.

pub mod builder;
pub mod config;
pub mod dictionary;
pub mod inverted;
pub mod posting;
pub mod shared;

pub use builder::{IndexBuilder, build_from_terms, build_from_texts};
pub use config::IndexConfig;
pub use dictionary::TermDictionary;
pub use inverted::{IndexStats, InvertedIndex};
pub use posting::{DocId, PostingEntry};
pub use shared::SharedIndex;
