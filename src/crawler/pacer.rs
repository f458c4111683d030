//! Request pacing
//!
//! The crawler waits a random, uniformly drawn delay before every page
//! fetch. The delay does not adapt to errors or response times.

use crate::config::PacingConfig;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Delay applied before each page fetch
#[async_trait]
pub trait Pacer: Send {
    /// Waits before fetching `page`
    async fn pause(&mut self, page: u32);
}

/// Sleeps for a uniformly random whole number of seconds in
/// `[min_delay_secs, max_delay_secs)`
#[derive(Debug)]
pub struct JitterPacer {
    rng: StdRng,
    min_secs: u64,
    max_secs: u64,
}

impl JitterPacer {
    /// Creates a pacer seeded from the operating system
    ///
    /// The window must be non-empty, which config validation guarantees.
    pub fn new(config: &PacingConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a pacer with a fixed seed, producing a repeatable delay sequence
    pub fn seeded(config: &PacingConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PacingConfig, rng: StdRng) -> Self {
        Self {
            rng,
            min_secs: config.min_delay_secs,
            max_secs: config.max_delay_secs.max(config.min_delay_secs + 1),
        }
    }

    /// Draws the next delay
    pub fn next_delay(&mut self) -> Duration {
        Duration::from_secs(self.rng.random_range(self.min_secs..self.max_secs))
    }
}

#[async_trait]
impl Pacer for JitterPacer {
    async fn pause(&mut self, page: u32) {
        let delay = self.next_delay();
        tracing::debug!("Waiting {}s before page {}", delay.as_secs(), page);
        tokio::time::sleep(delay).await;
    }
}
