use crate::config::SelectorConfig;
use crate::extract::predicate::{element_text, find_all};
use scraper::Html;

/// Extracts the text of every content region on a page
///
/// All elements matching `selector` are returned in document order, each as
/// whitespace-collapsed visible text. A page without matches yields an empty
/// vector.
pub fn extract_text(document: &Html, selector: &SelectorConfig) -> Vec<String> {
    find_all(document, selector)
        .into_iter()
        .map(element_text)
        .collect()
}
