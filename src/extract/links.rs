use crate::config::SelectorConfig;
use crate::extract::predicate::{element_text, find_first};
use crate::url::{extract_domain, is_followable, title_from_url, to_absolute};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// A navigation link discovered on the seed page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Filesystem-safe title derived from `href`
    pub title: String,
    /// Absolute URL
    pub href: String,
    /// Visible text of the anchor
    pub text: String,
    /// Network authority of `href`
    pub domain: String,
}

impl Link {
    /// Builds a link from an absolute href and its anchor text
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            title: title_from_url(&href),
            domain: extract_domain(&href),
            text: text.into(),
            href,
        }
    }
}

/// Extracts the navigation links of a page
///
/// # Extraction Rules
///
/// 1. The container is the first element matching `selector`. Without one
///    a warning is logged and no links are returned.
/// 2. Every `<a href>` inside the container is considered.
/// 3. Each href is resolved against `base_url` and its fragment dropped.
///
/// **Exclude:**
/// - Empty and fragment-only hrefs
/// - `javascript:`, `mailto:`, `tel:` and `data:` links
/// - Anything that does not resolve to an HTTP(S) URL with a host
///
/// Links are deduplicated by `href`. The first occurrence wins and document
/// order is preserved.
///
/// # Example
///
/// ```
/// use docscrape::config::SelectorConfig;
/// use docscrape::extract::{extract_links, parse_document};
///
/// let html = r#"<nav><a href="/docs/a">A</a><a href="/docs/a">Again</a></nav>"#;
/// let document = parse_document(html);
/// let links = extract_links(&document, "https://example.com/start", &SelectorConfig::link_default());
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].href, "https://example.com/docs/a");
/// ```
pub fn extract_links(document: &Html, base_url: &str, selector: &SelectorConfig) -> Vec<Link> {
    let Some(container) = find_first(document, selector) else {
        tracing::warn!(
            "Navigation container <{}> not found on {} (class-name: {:?}, class-contains: {:?}, id: {:?})",
            selector.tag,
            base_url,
            selector.class_name,
            selector.class_contains,
            selector.id
        );
        return Vec::new();
    };

    tracing::info!(
        "Navigation container found: <{}> class={:?}",
        selector.tag,
        container.value().attr("class").unwrap_or("")
    );

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in container.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve_link(href, base_url) else {
            tracing::debug!("Skipping unfollowable href: {}", href);
            continue;
        };

        if !seen.insert(absolute.clone()) {
            continue;
        }

        links.push(Link::new(absolute, element_text(anchor)));
    }

    tracing::debug!("Extracted {} unique links from {}", links.len(), base_url);

    links
}

/// Resolves an href to an absolute, fragment-free HTTP(S) URL
fn resolve_link(href: &str, base_url: &str) -> Option<String> {
    if !is_followable(href) {
        return None;
    }

    let absolute = to_absolute(href, base_url);
    let mut url = Url::parse(&absolute).ok()?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }

    url.set_fragment(None);
    Some(url.to_string())
}
