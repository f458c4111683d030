//! Crawler coordinator - pipeline orchestration
//!
//! Connects the crawl driver and the record sink through a bounded channel
//! and waits for both to finish:
//! - The driver runs as an async task and closes the channel when done
//! - The sink runs on a blocking task and drains the channel until closed
//! - The coordinator returns only after both tasks have joined

use crate::config::Config;
use crate::crawler::driver::CrawlDriver;
use crate::crawler::extractor::ListExtractor;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::pacer::{JitterPacer, Pacer};
use crate::output::{open_output, CrawlStatistics, SinkWriter};
use crate::range::PageRange;
use crate::MangaListError;
use std::io::Write;
use std::path::Path;
use tokio::sync::mpsc;

/// Main pipeline coordinator structure
pub struct Coordinator<F, P> {
    driver: CrawlDriver<F, P>,
    channel_capacity: usize,
}

impl Coordinator<HttpFetcher, JitterPacer> {
    /// Creates a coordinator with the HTTP fetcher and jittered pacing
    pub fn from_config(config: &Config) -> Result<Self, MangaListError> {
        let fetcher = HttpFetcher::new(&config.site)?;
        let pacer = JitterPacer::new(&config.pacing);
        Self::new(config, fetcher, pacer)
    }
}

impl<F, P> Coordinator<F, P>
where
    F: PageFetcher + 'static,
    P: Pacer + 'static,
{
    /// Creates a coordinator around the given fetcher and pacer
    pub fn new(config: &Config, fetcher: F, pacer: P) -> Result<Self, MangaListError> {
        let extractor = ListExtractor::new(config.site.name.clone(), config.labels.clone())?;
        let driver = CrawlDriver::new(fetcher, pacer, extractor, config.site.root_url.clone());

        Ok(Self {
            driver,
            channel_capacity: config.channel.capacity.max(1),
        })
    }

    /// Runs the driver and the sink concurrently until the range is exhausted
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStatistics)` - Both tasks finished
    /// * `Err(MangaListError)` - One of the tasks panicked
    pub async fn run<W>(
        self,
        range: PageRange,
        sink: SinkWriter<W>,
    ) -> Result<CrawlStatistics, MangaListError>
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let mut driver = self.driver;
        let mut sink = sink;

        tracing::info!("start: {}, end: {}", range.start(), range.end());

        let producer = tokio::spawn(async move { driver.run(range, tx).await });
        let consumer = tokio::task::spawn_blocking(move || sink.drain(rx));

        let (driver_stats, written) = tokio::join!(producer, consumer);
        let stats = CrawlStatistics::from_parts(driver_stats?, written?);

        tracing::info!(
            "Pipeline finished: {} records extracted, {} written",
            stats.records_extracted,
            stats.records_written
        );

        Ok(stats)
    }
}

/// Runs a complete crawl of `range`, appending records to `output`
///
/// This is the main entry point for the binary. It will:
/// 1. Open the output file for appending
/// 2. Build the HTTP fetcher and pacer from the configuration
/// 3. Run the driver and sink until the range is exhausted
pub async fn run_crawl(
    config: &Config,
    range: PageRange,
    output: &Path,
) -> Result<CrawlStatistics, MangaListError> {
    let file = open_output(output)?;
    let coordinator = Coordinator::from_config(config)?;
    coordinator.run(range, SinkWriter::new(file)).await
}
