//! Tokenizers split raw document text into tokens without changing their content.

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
