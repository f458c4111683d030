use serde::Deserialize;

/// Main configuration structure for Manga-List
///
/// Every section falls back to its defaults, so an empty file is a valid
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub pacing: PacingConfig,
    pub labels: StatusLabels,
    pub channel: ChannelConfig,
}

/// Target site identity and request headers
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Identifier written to every record's `web` field
    pub name: String,

    /// Listing root; page 1 is fetched from here, page N from `index_pN.html` below it
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Referer header sent with every request
    pub referer: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "manhuagui".to_string(),
            root_url: "https://www.manhuagui.com/list/".to_string(),
            referer: "https://www.manhuagui.com/list/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/80.0.3987.100 Safari/537.36"
                .to_string(),
        }
    }
}

/// Delay window applied before every page fetch
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Lower bound of the delay in seconds (inclusive)
    #[serde(rename = "min-delay-secs")]
    pub min_delay_secs: u64,

    /// Upper bound of the delay in seconds (exclusive)
    #[serde(rename = "max-delay-secs")]
    pub max_delay_secs: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 50,
            max_delay_secs: 70,
        }
    }
}

/// Text appended to a record's status for each marker outcome
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub completed: String,
    pub ongoing: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            completed: "completed".to_string(),
            ongoing: "ongoing".to_string(),
        }
    }
}

/// Record channel between the crawl driver and the sink
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Number of records that may wait in the channel before the driver blocks
    pub capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { capacity: 1 }
    }
}
