//! docscrape: a documentation-site scraper
//!
//! This crate fetches a seed page, follows the links found in its navigation
//! container, extracts text from each linked page using configurable selectors,
//! and appends the results to a flat text file. A CSV page log records every
//! fetch attempt so reruns skip pages that were already scraped.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod page_log;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docscrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),

    #[error("Page log error: {0}")]
    PageLog(#[from] page_log::PageLogError),

    #[error("Permission denied: cannot create directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to fetch seed page {url}: {source}")]
    SeedFetch {
        url: String,
        source: fetch::FetchError,
    },

    #[error("No navigation links found on {url}.{}", debug_hint(.debug_path))]
    NoLinks {
        url: String,
        debug_path: Option<PathBuf>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn debug_hint(debug_path: &Option<PathBuf>) -> String {
    match debug_path {
        Some(path) => format!(
            "\nCheck: {}\nFix the link selector and re-run with --overwrite.",
            path.display()
        ),
        None => "\nRe-run with --overwrite --save-html to inspect the fetched page.".to_string(),
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error(
        "An API key is required when using the proxy backend. \
         Set it via --api-key or the SCRAPING_ANT_API_KEY environment variable."
    )]
    MissingCredential,
}

/// Result type alias for docscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{ClassMatch, ScrapeConfig, SelectorConfig};
pub use crawler::{Coordinator, RunSummary};
pub use extract::{extract_links, extract_text, Link};
pub use fetch::{FetchResponse, Fetcher};
pub use page_log::{PageLog, PageStatus, ScrapingPage};
pub use url::{dir_name_from_url, title_from_url, to_absolute};
