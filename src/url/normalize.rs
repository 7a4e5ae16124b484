use url::Url;

/// Resolves a possibly-relative href against a base URL
///
/// # Resolution Rules
///
/// 1. An href that already parses as an absolute URL passes through unchanged
/// 2. A root-relative href (`/path`) resolves against the scheme and
///    authority of `base_url`
/// 3. Any other relative href resolves against the full path of `base_url`
///    using standard URL-join semantics
///
/// There is no error path: when `base_url` itself cannot be parsed, the two
/// strings are joined on a best-effort basis.
///
/// # Examples
///
/// ```
/// use docscrape::url::to_absolute;
///
/// let base = "https://example.com/docs/guide/intro";
/// assert_eq!(to_absolute("/api", base), "https://example.com/api");
/// assert_eq!(to_absolute("setup", base), "https://example.com/docs/guide/setup");
/// assert_eq!(to_absolute("https://other.com/b", base), "https://other.com/b");
/// ```
pub fn to_absolute(href: &str, base_url: &str) -> String {
    let href = href.trim();

    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => join_best_effort(href, base_url),
    }
}

/// String-level fallback used when the base URL does not parse
fn join_best_effort(href: &str, base_url: &str) -> String {
    if let Some(path) = href.strip_prefix('/') {
        // Keep "scheme://authority" when the base has one
        let origin = match base_url.find("://") {
            Some(idx) => {
                let after_scheme = idx + 3;
                match base_url[after_scheme..].find('/') {
                    Some(slash) => &base_url[..after_scheme + slash],
                    None => base_url,
                }
            }
            None => base_url.trim_end_matches('/'),
        };
        return format!("{}/{}", origin, path);
    }

    match base_url.rfind('/') {
        Some(idx) => format!("{}{}", &base_url[..=idx], href),
        None => format!("{}/{}", base_url, href),
    }
}

/// Checks whether a raw href can lead to a fetchable page
///
/// Returns false for:
/// - empty hrefs
/// - fragment-only links (same page anchors)
/// - `javascript:`, `mailto:`, `tel:` and `data:` schemes
pub fn is_followable(href: &str) -> bool {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return false;
    }

    let lower = href.to_ascii_lowercase();
    !(lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:"))
}
