//! HTTP fetcher implementation
//!
//! This module issues the listing-page requests for the crawler:
//! - Building the HTTP client with the site's User-Agent
//! - One GET per page with a fixed Referer
//! - Separating transport failures from the returned status code
//!
//! Redirects are not followed; the 3xx status itself is returned.
//! There are no retries and no timeout beyond the client defaults.

use crate::config::SiteConfig;
use crate::PageError;
use async_trait::async_trait;
use reqwest::header::REFERER;
use reqwest::{redirect::Policy, Client};

/// Status and body of a fetched page
///
/// Any status is returned as-is; deciding what counts as success is left to
/// the caller.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: Vec<u8>,
}

/// Source of listing-page bodies
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` once
    ///
    /// Returns `Err` only for transport failures; a non-200 response is an
    /// `Ok` carrying that status.
    async fn fetch(&self, url: &str) -> Result<FetchResponse, PageError>;
}

/// Builds an HTTP client carrying the site's User-Agent
///
/// # Example
///
/// ```no_run
/// use manga_list::config::SiteConfig;
/// use manga_list::crawler::build_http_client;
///
/// let client = build_http_client(&SiteConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(Policy::none()) // a 3xx is a failed page, not a different page
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    referer: String,
}

impl HttpFetcher {
    /// Creates a fetcher sending the configured Referer and User-Agent
    pub fn new(config: &SiteConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            referer: config.referer.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, PageError> {
        let response = self
            .client
            .get(url)
            .header(REFERER, self.referer.as_str())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, e))?;

        tracing::debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Maps a transport error onto a page error
fn classify_error(url: &str, error: reqwest::Error) -> PageError {
    if error.is_timeout() {
        PageError::Timeout {
            url: url.to_string(),
        }
    } else {
        PageError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
