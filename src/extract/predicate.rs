use crate::config::{ClassMatch, SelectorConfig};
use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never visible
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Finds every element matching the selector, in document order
pub fn find_all<'a>(document: &'a Html, selector: &SelectorConfig) -> Vec<ElementRef<'a>> {
    let Some(tag_selector) = tag_selector(&selector.tag) else {
        return Vec::new();
    };
    let class_match = selector.class_match();

    document
        .select(&tag_selector)
        .filter(|element| matches_attributes(selector, &class_match, element.value()))
        .collect()
}

/// Finds the first element matching the selector
pub fn find_first<'a>(document: &'a Html, selector: &SelectorConfig) -> Option<ElementRef<'a>> {
    let tag_selector = tag_selector(&selector.tag)?;
    let class_match = selector.class_match();

    document
        .select(&tag_selector)
        .find(|element| matches_attributes(selector, &class_match, element.value()))
}

fn tag_selector(tag: &str) -> Option<Selector> {
    match Selector::parse(&tag.to_ascii_lowercase()) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Cannot build selector for tag '{}': {:?}", tag, e);
            None
        }
    }
}

/// Checks class, id and role; the tag is matched by the CSS selector
fn matches_attributes(selector: &SelectorConfig, class_match: &ClassMatch, element: &Element) -> bool {
    class_match.matches(element.attr("class"))
        && selector
            .id
            .as_deref()
            .map_or(true, |id| element.attr("id") == Some(id))
        && selector
            .role
            .as_deref()
            .map_or(true, |role| element.attr("role") == Some(role))
}

/// Returns the visible text of an element with whitespace collapsed
///
/// Text inside `script`, `style`, `noscript` and `template` descendants is
/// skipped. Runs of whitespace become a single space and the result is
/// trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| INVISIBLE_TAGS.contains(&e.name()))
        });

        if !hidden {
            raw.push_str(text);
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
