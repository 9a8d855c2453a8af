//! Command line interface for the lexicon demonstration binary.
//!
//! The CLI is a thin consumer of the library: it reads documents from a
//! file, builds an index, and prints term lookups or the full posting table.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
