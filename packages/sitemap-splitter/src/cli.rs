//! Command-line interface for the sitemap splitter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DEFAULT_LIMIT;
use crate::error::{Result, SplitterError};
use crate::splitter::SitemapSplitter;
use crate::types::SplitSummary;

/// Sitemap Splitter - Split large XML sitemaps into chunks with a sitemap index.
#[derive(Parser)]
#[command(name = "sitemap-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log progress at info level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a sitemap into chunk files and write sitemap-index.xml beside it.
    Split {
        /// Path to the sitemap XML file
        path: PathBuf,

        /// Maximum number of URLs per chunk file
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print the result as JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI with already parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split { path, limit, json } => split_command(path, limit, json),
    }
}

/// Execute the split command.
fn split_command(path: PathBuf, limit: usize, json: bool) -> Result<()> {
    // Validate before touching the filesystem
    let splitter = SitemapSplitter::new(path, limit)?;

    if json {
        let summary = splitter.split()?;
        let out = serde_json::to_string_pretty(&summary).map_err(|e| {
            SplitterError::Serialization {
                document: "summary",
                message: e.to_string(),
            }
        })?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "{} {} into chunks of at most {} URLs",
        style("Splitting").bold(),
        style(splitter.config().source_path().display()).cyan(),
        style(limit).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Splitting sitemap...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match splitter.split() {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &SplitSummary) {
    for chunk in &summary.chunks {
        println!(
            "  {} ({} URLs)",
            style(chunk.path.display()).green(),
            chunk.url_count
        );
    }
    println!();
    println!(
        "{} {} ({} sitemaps, {} URLs)",
        style("Index saved to:").green().bold(),
        summary.index_path.display(),
        summary.chunks.len(),
        summary.total_urls()
    );
}
