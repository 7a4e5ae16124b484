//! Output module for scraped content
//!
//! This module handles:
//! - The per-run text file holding `<TITLE>`/`<CONTENT>` blocks
//! - Raw HTML dumps written when `--save-html` is set

mod content_file;
mod html_dump;

pub use content_file::{format_page, ContentFile, FILE_HEADER};
pub use html_dump::{save_html, HTML_DIR_NAME};
