//! Crawl driver - the producer half of the pipeline
//!
//! Walks a page range in ascending order. For every page it waits on the
//! pacer, fetches and extracts the listing, and sends the records into the
//! output channel one by one. A failed page is logged and skipped. The channel
//! is closed when the driver returns, which is the sink's only completion
//! signal.

use crate::crawler::extractor::ListExtractor;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::pacer::Pacer;
use crate::range::{page_url, PageRange};
use crate::record::Record;
use tokio::sync::mpsc;

/// Counters reported by the driver when the range is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub pages_requested: u64,
    pub pages_succeeded: u64,
    pub pages_failed: u64,
    pub records_sent: u64,
}

/// Producer that turns a page range into a stream of records
pub struct CrawlDriver<F, P> {
    fetcher: F,
    pacer: P,
    extractor: ListExtractor,
    root_url: String,
}

impl<F, P> CrawlDriver<F, P>
where
    F: PageFetcher,
    P: Pacer,
{
    pub fn new(
        fetcher: F,
        pacer: P,
        extractor: ListExtractor,
        root_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            pacer,
            extractor,
            root_url: root_url.into(),
        }
    }

    /// Crawls every page in `range`, sending records into `out`
    ///
    /// Sending blocks while the channel is full, so a slow sink throttles the
    /// crawl. `out` is dropped on return, closing the channel. If the
    /// receiving side has gone away the crawl stops early.
    pub async fn run(&mut self, range: PageRange, out: mpsc::Sender<Record>) -> DriverStats {
        let mut stats = DriverStats::default();

        tracing::info!("Crawling pages {} ({} pages)", range, range.len());

        for page in range.pages() {
            self.pacer.pause(page).await;

            let url = page_url(&self.root_url, page);
            stats.pages_requested += 1;

            let records = match self.extractor.extract_list_page(&self.fetcher, &url).await {
                Ok(records) => records,
                Err(e) => {
                    stats.pages_failed += 1;
                    tracing::warn!("list err, page {}: {}", page, e);
                    continue;
                }
            };

            stats.pages_succeeded += 1;
            tracing::info!("list success, page {}, records: {}", page, records.len());

            for record in records {
                if out.send(record).await.is_err() {
                    tracing::error!("Record sink closed, stopping crawl at page {}", page);
                    return stats;
                }
                stats.records_sent += 1;
            }
        }

        tracing::info!(
            "Crawl finished: {} pages requested, {} failed, {} records sent",
            stats.pages_requested,
            stats.pages_failed,
            stats.records_sent
        );

        stats
    }
}
