//! Manga-List main entry point
//!
//! This is the command-line interface for the Manga-List catalog crawler.

use anyhow::{bail, Context};
use clap::Parser;
use manga_list::config::load_config_or_default;
use manga_list::crawler::run_crawl;
use manga_list::output::print_statistics;
use manga_list::PageRange;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Manga-List: a paced catalog crawler
///
/// Manga-List walks a range of catalog listing pages, waiting a random
/// interval before each request, and appends one JSON line per catalog
/// entry to the output file.
#[derive(Parser, Debug)]
#[command(name = "manga-list")]
#[command(version = "1.0.0")]
#[command(about = "A paced manga catalog crawler", long_about = None)]
struct Cli {
    /// Output file (newline-delimited JSON, appended to)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: String,

    /// Page range to crawl, <start>-<end>
    #[arg(short = 'p', long = "pages", value_name = "RANGE", default_value = "1-5")]
    pages: String,

    /// Optional TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if cli.file.is_empty() {
        bail!("output file path (-f) cannot be empty");
    }
    let output = PathBuf::from(&cli.file);

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    let pages = if cli.pages.is_empty() { "1-5" } else { cli.pages.as_str() };
    let range: PageRange = pages
        .parse()
        .with_context(|| format!("page range err, {}", pages))?;

    tracing::info!(
        "Crawling {} pages {} into {}",
        config.site.name,
        range,
        output.display()
    );

    let stats = run_crawl(&config, range, &output)
        .await
        .with_context(|| format!("Crawl into {} failed", output.display()))?;

    if !cli.quiet {
        print_statistics(&stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("manga_list=info,warn"),
            1 => EnvFilter::new("manga_list=debug,info"),
            2 => EnvFilter::new("manga_list=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
