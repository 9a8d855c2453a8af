//! Analyzers that combine a tokenizer and filters into index terms.

mod term;

pub use term::TermAnalyzer;
