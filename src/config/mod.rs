//! Configuration module for docscrape
//!
//! Settings come from three layers: built-in defaults, an optional TOML file,
//! and command-line flags. The merged result is validated once, before any
//! network or filesystem work starts.
//!
//! # Example
//!
//! ```no_run
//! use docscrape::config::{build_config, load_config_file, OutputConfig, SelectorSection};
//! use std::path::{Path, PathBuf};
//!
//! let file = load_config_file(Path::new("docscrape.toml")).unwrap();
//! let output = OutputConfig {
//!     output_dir: PathBuf::from("out"),
//!     save_html: false,
//!     overwrite: false,
//! };
//! let config = build_config(
//!     "https://docs.example.com/start",
//!     output,
//!     file,
//!     SelectorSection::default(),
//!     SelectorSection::default(),
//! )
//! .unwrap();
//! println!("Links come from <{}>", config.link_selector.tag);
//! ```

mod parser;
mod types;
mod validation;

use std::path::PathBuf;

// Re-export types
pub use types::{
    ClassMatch, ConfigFile, FetchConfig, OutputConfig, ScrapeConfig, SelectorConfig,
    SelectorSection, DEFAULT_CONTENT_TAG, DEFAULT_LINK_TAG, DEFAULT_PROXY_ENDPOINT,
};

// Re-export parser functions
pub use parser::{build_config, load_config_file};

/// Returns the user's downloads directory, or the current directory if no
/// home directory is known
pub fn default_output_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("."))
}
