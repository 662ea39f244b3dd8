use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::search::TextIndex;

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Find words in a text document, with surrounding context", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/concord/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every occurrence of a word with its context window
    Search {
        file: PathBuf,
        word: String,
        /// Tokens of context on each side
        #[arg(short, long)]
        context: Option<usize>,
        /// Keep the partial index if reading fails midway
        #[arg(long)]
        best_effort: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print token and term counts with the most frequent terms
    Stats {
        file: PathBuf,
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
        #[arg(long)]
        best_effort: bool,
    },
}

/// Writes every window for `word`, one per line, or a JSON array of matches.
pub fn write_search<W: Write>(
    out: &mut W,
    index: &TextIndex,
    word: &str,
    context: usize,
    json: bool,
) -> Result<()> {
    if json {
        let hits = index.concordance(word, context);
        serde_json::to_writer_pretty(&mut *out, &hits).context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    let results = index.search(word, context);
    if results.is_empty() {
        tracing::info!("No occurrences of {:?}", word);
    }
    for line in results {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Writes token and term counts followed by the `top` most frequent terms.
pub fn write_stats<W: Write>(out: &mut W, index: &TextIndex, top: usize) -> Result<()> {
    writeln!(out, "tokens: {}", index.token_count())?;
    writeln!(out, "terms:  {}", index.term_count())?;
    for (term, count) in index.top_terms(top) {
        writeln!(out, "{:>8}  {}", count, term)?;
    }
    Ok(())
}
