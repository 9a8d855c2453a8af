//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{LexiconArgs, OutputFormat};
use crate::error::Result;
use crate::index::{DocId, IndexStats, InvertedIndex, PostingEntry};
use crate::query::QueryResult;

/// Result structure for one term lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermLookup {
    pub term: String,
    pub found: bool,
    pub document_frequency: usize,
    pub document_ids: Vec<DocId>,
}

impl From<&QueryResult<'_, DocId>> for TermLookup {
    fn from(result: &QueryResult<'_, DocId>) -> Self {
        TermLookup {
            term: result.term().to_string(),
            found: result.is_found(),
            document_frequency: result.document_frequency(),
            document_ids: result.document_ids().to_vec(),
        }
    }
}

/// Result structure for the posting listing.
#[derive(Debug, Serialize)]
pub struct PostingsListing<'a> {
    pub stats: IndexStats,
    pub postings: Vec<&'a PostingEntry<DocId>>,
}

/// Write term lookups in the requested format.
pub fn write_lookups<W: Write>(
    out: &mut W,
    results: &[QueryResult<'_, DocId>],
    args: &LexiconArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for result in results {
                writeln!(out, "{result}")?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let lookups: Vec<TermLookup> = results.iter().map(TermLookup::from).collect();
            write_json(out, &lookups, args)
        }
    }
}

/// Write every posting entry in the requested format.
pub fn write_postings<W: Write>(
    out: &mut W,
    index: &InvertedIndex<DocId>,
    args: &LexiconArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                let stats = index.stats();
                writeln!(
                    out,
                    "# {} documents, {} terms, {} postings",
                    stats.doc_count, stats.term_count, stats.posting_count
                )?;
            }
            for entry in index {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    entry.term(),
                    entry.document_frequency(),
                    format_ids(entry.document_ids())
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let listing = PostingsListing {
                stats: index.stats(),
                postings: index.iter().collect(),
            };
            write_json(out, &listing, args)
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &LexiconArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn format_ids(ids: &[DocId]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(", "))
}
