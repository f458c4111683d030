//! Catalog record type
//!
//! One [`Record`] is produced per entry on a listing page. The serialized
//! field names are read by downstream consumers and must stay stable.

use serde::{Deserialize, Serialize};

/// A single catalog entry extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the crawled site
    #[serde(rename = "web")]
    pub site: String,

    /// Display name of the entry
    pub title: String,

    /// Link to the entry's detail page, as written in the markup
    pub link: String,

    /// Status labels joined without separator; may be empty or hold both
    #[serde(rename = "type")]
    pub status: String,

    /// Raw "updated on" text
    #[serde(rename = "lastUpdateTime")]
    pub last_update: String,

    /// Listing page this record was extracted from
    #[serde(rename = "source")]
    pub source_page: String,
}
