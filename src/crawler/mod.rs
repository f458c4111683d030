//! Crawler module for listing-page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with fixed headers
//! - Record extraction from listing markup
//! - Randomized request pacing
//! - The producer loop over a page range
//! - Overall pipeline coordination

mod coordinator;
mod driver;
mod extractor;
mod fetcher;
mod pacer;

pub use coordinator::{run_crawl, Coordinator};
pub use driver::{CrawlDriver, DriverStats};
pub use extractor::ListExtractor;
pub use fetcher::{build_http_client, FetchResponse, HttpFetcher, PageFetcher};
pub use pacer::{JitterPacer, Pacer};
