//! Output module for persisting crawl results
//!
//! This module handles:
//! - Appending records to a newline-delimited JSON file
//! - Summarizing a run's counters

mod sink;
pub mod stats;

pub use sink::{open_output, DurableFile, SinkWriter};
pub use stats::{print_statistics, CrawlStatistics};
