//! Configuration module for Manga-List
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] targets the
//! manhuagui catalog with a 50-70 second delay window.
//!
//! # Example
//!
//! ```no_run
//! use manga_list::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("manga-list.toml")).unwrap();
//! println!("Crawling listing root: {}", config.site.root_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ChannelConfig, Config, PacingConfig, SiteConfig, StatusLabels};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
