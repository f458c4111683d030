//! Listing-page record extraction
//!
//! Each listing page holds a `<ul id="contList">` whose `<li>` children are
//! catalog entries:
//!
//! ```html
//! <ul id="contList">
//!   <li>
//!     <p class="ell"><a href="/comic/1/" title="Name">Name</a></p>
//!     <span class="updateon">2020-02-20</span>
//!     <span class="sl"></span>
//!   </li>
//! </ul>
//! ```
//!
//! Fields are taken as written, without validation; a malformed entry yields
//! a record with empty title or link.

use crate::config::StatusLabels;
use crate::crawler::fetcher::PageFetcher;
use crate::record::Record;
use crate::{MangaListError, PageError};
use scraper::{ElementRef, Html, Selector};

const ENTRY_SELECTOR: &str = "ul#contList > li";
const PARAGRAPH_SELECTOR: &str = "p";
const ANCHOR_SELECTOR: &str = "a";
const UPDATED_SELECTOR: &str = "span.updateon";
const COMPLETED_MARKER_SELECTOR: &str = "span.fd";
const ONGOING_MARKER_SELECTOR: &str = "span.sl";

/// Turns listing-page markup into records
#[derive(Debug, Clone)]
pub struct ListExtractor {
    site: String,
    labels: StatusLabels,
    entry: Selector,
    paragraph: Selector,
    anchor: Selector,
    updated: Selector,
    completed_marker: Selector,
    ongoing_marker: Selector,
}

impl ListExtractor {
    /// Creates an extractor stamping `site` on every record
    pub fn new(site: impl Into<String>, labels: StatusLabels) -> Result<Self, MangaListError> {
        Ok(Self {
            site: site.into(),
            labels,
            entry: compile(ENTRY_SELECTOR)?,
            paragraph: compile(PARAGRAPH_SELECTOR)?,
            anchor: compile(ANCHOR_SELECTOR)?,
            updated: compile(UPDATED_SELECTOR)?,
            completed_marker: compile(COMPLETED_MARKER_SELECTOR)?,
            ongoing_marker: compile(ONGOING_MARKER_SELECTOR)?,
        })
    }

    /// Extracts every entry of a listing document, in document order
    ///
    /// A missing or empty list yields no records rather than an error.
    pub fn extract(&self, html: &str, source_page: &str) -> Vec<Record> {
        let document = Html::parse_document(html);

        document
            .select(&self.entry)
            .map(|entry| self.extract_entry(entry, source_page))
            .collect()
    }

    fn extract_entry(&self, entry: ElementRef<'_>, source_page: &str) -> Record {
        let anchor = entry
            .select(&self.paragraph)
            .next()
            .and_then(|p| p.select(&self.anchor).next());

        let attr = |name: &str| {
            anchor
                .and_then(|a| a.value().attr(name))
                .unwrap_or_default()
                .to_string()
        };

        let last_update = entry
            .select(&self.updated)
            .next()
            .and_then(first_text)
            .unwrap_or_default();

        Record {
            site: self.site.clone(),
            title: attr("title"),
            link: attr("href"),
            status: self.status(entry),
            last_update,
            source_page: source_page.to_string(),
        }
    }

    /// Builds the status string from the two marker spans
    ///
    /// A label is appended when its marker is *absent*: no `span.fd` reads as
    /// completed, no `span.sl` reads as ongoing. This matches how the site's
    /// markup has been interpreted by existing consumers of the output.
    fn status(&self, entry: ElementRef<'_>) -> String {
        let mut status = String::new();
        if entry.select(&self.completed_marker).next().is_none() {
            status.push_str(&self.labels.completed);
        }
        if entry.select(&self.ongoing_marker).next().is_none() {
            status.push_str(&self.labels.ongoing);
        }
        status
    }

    /// Fetches one listing page and extracts its records
    ///
    /// Transport errors propagate unchanged; any status other than 200 is a
    /// [`PageError::Status`].
    pub async fn extract_list_page<F>(
        &self,
        fetcher: &F,
        url: &str,
    ) -> Result<Vec<Record>, PageError>
    where
        F: PageFetcher + ?Sized,
    {
        let response = fetcher.fetch(url).await?;

        if response.status != 200 {
            return Err(PageError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let html = String::from_utf8_lossy(&response.body);
        Ok(self.extract(&html, url))
    }
}

/// First non-blank text node directly under `element`, untrimmed
///
/// Text inside nested elements is not included.
fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.to_string())
        .find(|text| !text.trim().is_empty())
}

fn compile(selector: &str) -> Result<Selector, MangaListError> {
    Selector::parse(selector)
        .map_err(|e| MangaListError::Selector(format!("{}: {:?}", selector, e)))
}
