//! Command line argument parsing for the lexicon CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lexicon - build an in-memory inverted index and look up terms
#[derive(Parser, Debug, Clone)]
#[command(name = "lexicon")]
#[command(about = "Build an in-memory inverted index and look up terms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiconArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiconArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up one or more terms
    Search(SearchArgs),

    /// List every posting in first-seen term order
    Postings(PostingsArgs),
}

/// Where the documents come from and how to read them.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Document file: one document per line, or a JSON object with --keyed
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Read a JSON object mapping numeric document ids to arrays of terms
    #[arg(short, long)]
    pub keyed: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for looking up terms
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Terms to look up
    #[arg(value_name = "TERM", required = true, num_args = 1..)]
    pub terms: Vec<String>,
}

/// Arguments for listing postings
#[derive(Args, Debug, Clone)]
pub struct PostingsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Sort each posting list by document id
    #[arg(long)]
    pub sorted: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
