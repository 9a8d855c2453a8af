//! Command implementations for the lexicon CLI.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexiconError, Result};
use crate::index::{DocId, IndexBuilder, IndexConfig, InvertedIndex};
use crate::query::IndexSearcher;

/// Execute a CLI command, writing results to standard output.
pub fn execute_command(args: LexiconArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)
}

/// Execute a CLI command, writing results to `out`.
pub fn run_command<W: Write>(args: &LexiconArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, args, out),
        Command::Postings(postings_args) => postings(postings_args, args, out),
    }
}

/// Look up terms.
fn search<W: Write>(args: &SearchArgs, cli_args: &LexiconArgs, out: &mut W) -> Result<()> {
    let builder = load_documents(&args.corpus)?;
    let searcher = IndexSearcher::new(builder.finish());

    let results = searcher.find_all(&args.terms);
    write_lookups(out, &results, cli_args)
}

/// List every posting.
fn postings<W: Write>(args: &PostingsArgs, cli_args: &LexiconArgs, out: &mut W) -> Result<()> {
    let builder = load_documents(&args.corpus)?;
    let index = if args.sorted {
        builder.finish_sorted()
    } else {
        builder.finish()
    };

    write_postings(out, &index, cli_args)
}

/// Build an index directly from the corpus arguments.
pub fn load_index(corpus: &CorpusArgs) -> Result<InvertedIndex<DocId>> {
    Ok(load_documents(corpus)?.finish())
}

/// Read every document into a builder without finishing it.
fn load_documents(corpus: &CorpusArgs) -> Result<IndexBuilder<DocId>> {
    let config = match &corpus.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            IndexConfig::from_json_str(&contents)?
        }
        None => IndexConfig::default(),
    };
    let mut builder = IndexBuilder::with_config(config)?;
    let start_time = Instant::now();

    if corpus.keyed {
        let contents = fs::read_to_string(&corpus.documents)
            .with_context(|| format!("reading documents {}", corpus.documents.display()))?;
        let documents: BTreeMap<DocId, Vec<String>> =
            serde_json::from_str(&contents).map_err(|e| {
                LexiconError::invalid_argument(format!(
                    "{}: expected a JSON object of id -> [terms]: {e}",
                    corpus.documents.display()
                ))
            })?;
        for (document_id, terms) in documents {
            builder.add_terms(document_id, terms);
        }
    } else {
        let file = File::open(&corpus.documents)
            .with_context(|| format!("opening documents {}", corpus.documents.display()))?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            builder.add_text(&line?);
        }
    }

    info!(
        "Loaded {} documents ({} terms) from {} in {:?}",
        builder.doc_count(),
        builder.term_count(),
        corpus.documents.display(),
        start_time.elapsed()
    );

    Ok(builder)
}
