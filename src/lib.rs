//! Manga-List: a paced listing-page crawler
//!
//! This crate crawls the paginated catalog of a manga site, extracts one record
//! per catalog entry, and streams the records to a newline-delimited JSON file
//! through a producer/consumer pipeline.

pub mod config;
pub mod crawler;
pub mod output;
pub mod range;
pub mod record;

use thiserror::Error;

/// Main error type for Manga-List operations
#[derive(Debug, Error)]
pub enum MangaListError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Page range parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("expected <start>-<end>, got '{0}'")]
    TokenCount(String),

    #[error("'{0}' is not a page number")]
    InvalidNumber(String),

    #[error("start > end ({start} > {end})")]
    StartAfterEnd { start: u32, end: u32 },

    #[error("page indices start at 1")]
    ZeroIndex,
}

/// Errors for a single listing page. None of these abort the crawl.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("non-200 status {status} for {url}")]
    Status { url: String, status: u16 },
}

// Re-export commonly used types
pub use config::Config;
pub use range::{page_url, parse_range, PageRange};
pub use record::Record;
