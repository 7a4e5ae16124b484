//! URL handling module for docscrape
//!
//! This module turns possibly-relative hrefs into absolute URLs and derives
//! the filesystem-safe names used for output files and directories.

mod domain;
mod normalize;
mod title;

// Re-export main functions
pub use domain::{dir_name_from_url, extract_domain};
pub use normalize::{is_followable, to_absolute};
pub use title::title_from_url;
