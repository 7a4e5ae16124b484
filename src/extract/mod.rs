//! HTML extraction for docscrape
//!
//! This module contains the two extractors run against fetched pages:
//! - Link extraction from the navigation container of the seed page
//! - Text extraction from the content regions of each linked page
//!
//! Both are built on one element predicate (tag plus optional class, id and
//! role) and never fail on malformed HTML.

mod content;
mod links;
mod predicate;

pub use content::extract_text;
pub use links::{extract_links, Link};
pub use predicate::{element_text, find_all, find_first};

use scraper::Html;

/// Parses raw markup into a navigable document
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
