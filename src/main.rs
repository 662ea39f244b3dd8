use anyhow::Context;
use clap::Parser;
use concord::cli::{self, Cli, Commands};
use concord::error::Result;
use concord::{Config, TextIndex};
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    let args = Cli::parse();
    concord::tracing::init(args.verbose);

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let mut out = io::stdout().lock();

    match args.command {
        Commands::Search {
            file,
            word,
            context,
            best_effort,
            json,
        } => {
            let config = config.with_overrides(context, best_effort);
            let index = open_index(&file, &config)?;
            cli::write_search(&mut out, &index, &word, config.context, json)?;
        }
        Commands::Stats {
            file,
            top,
            best_effort,
        } => {
            let config = config.with_overrides(None, best_effort);
            let index = open_index(&file, &config)?;
            cli::write_stats(&mut out, &index, top)?;
        }
    }

    Ok(())
}

fn open_index(file: &Path, config: &Config) -> Result<TextIndex> {
    TextIndex::open(file, config.scan_policy)
        .with_context(|| format!("Failed to index {}", file.display()))
}
