//! End-of-run crawl statistics

use crate::crawler::DriverStats;

/// Crawl statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Listing pages the driver attempted
    pub pages_requested: u64,

    /// Pages fetched with status 200 and parsed
    pub pages_succeeded: u64,

    /// Pages skipped after a transport error or non-200 status
    pub pages_failed: u64,

    /// Records handed to the sink
    pub records_extracted: u64,

    /// Records written to the output
    pub records_written: u64,
}

impl CrawlStatistics {
    /// Combines the producer and consumer counters
    pub fn from_parts(driver: DriverStats, records_written: u64) -> Self {
        Self {
            pages_requested: driver.pages_requested,
            pages_succeeded: driver.pages_succeeded,
            pages_failed: driver.pages_failed,
            records_extracted: driver.records_sent,
            records_written,
        }
    }

    /// Records extracted but not written
    pub fn records_dropped(&self) -> u64 {
        self.records_extracted.saturating_sub(self.records_written)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Pages:");
    println!("  Requested: {}", stats.pages_requested);
    println!("  Succeeded: {}", stats.pages_succeeded);
    println!("  Failed: {}", stats.pages_failed);
    println!();

    println!("Records:");
    println!("  Extracted: {}", stats.records_extracted);
    println!("  Written: {}", stats.records_written);
    if stats.records_dropped() > 0 {
        println!("  Dropped: {}", stats.records_dropped());
    }
    println!();

    let success_rate = if stats.pages_requested > 0 {
        (stats.pages_succeeded as f64 / stats.pages_requested as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} pages fetched)",
        success_rate, stats.pages_succeeded, stats.pages_requested
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let driver = DriverStats {
            pages_requested: 5,
            pages_succeeded: 4,
            pages_failed: 1,
            records_sent: 120,
        };
        let stats = CrawlStatistics::from_parts(driver, 118);

        assert_eq!(stats.pages_requested, 5);
        assert_eq!(stats.records_extracted, 120);
        assert_eq!(stats.records_written, 118);
        assert_eq!(stats.records_dropped(), 2);
    }

    #[test]
    fn test_records_dropped_never_negative() {
        let stats = CrawlStatistics {
            records_written: 3,
            ..Default::default()
        };
        assert_eq!(stats.records_dropped(), 0);
    }
}
