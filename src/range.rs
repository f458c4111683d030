//! Page range parsing and listing-page URL construction

use crate::RangeError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A closed interval of 1-indexed listing pages, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Builds a range, rejecting `start > end` and page 0
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start == 0 {
            return Err(RangeError::ZeroIndex);
        }
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// A valid range always holds at least one page
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Page indices in ascending order
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self { start: 1, end: 5 }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for PageRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = parse_range(s)?;
        PageRange::new(start, end)
    }
}

/// Parses `<start>-<end>` into its bounds
///
/// The input must split on `-` into exactly two integers with `start <= end`.
///
/// # Example
///
/// ```
/// use manga_list::parse_range;
///
/// assert_eq!(parse_range("2-7").unwrap(), (2, 7));
/// assert!(parse_range("3-2").is_err());
/// ```
pub fn parse_range(raw: &str) -> Result<(u32, u32), RangeError> {
    let tokens: Vec<&str> = raw.split('-').collect();
    if tokens.len() != 2 {
        return Err(RangeError::TokenCount(raw.to_string()));
    }

    let start = parse_page_number(tokens[0])?;
    let end = parse_page_number(tokens[1])?;

    if start > end {
        return Err(RangeError::StartAfterEnd { start, end });
    }

    Ok((start, end))
}

fn parse_page_number(token: &str) -> Result<u32, RangeError> {
    token
        .parse::<u32>()
        .map_err(|_| RangeError::InvalidNumber(token.to_string()))
}

/// Builds the listing URL for a page index
///
/// Page 1 is the root itself; every later page is `index_p{page}.html`
/// beneath it.
pub fn page_url(root: &str, page: u32) -> String {
    if page == 1 {
        root.to_string()
    } else {
        format!("{}index_p{}.html", root, page)
    }
}
