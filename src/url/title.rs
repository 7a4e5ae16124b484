use url::Url;

/// Number of trailing path segments kept in a derived title
const TITLE_SEGMENTS: usize = 3;

/// Derives a human-readable, filesystem-safe title from a URL path
///
/// The path is split into segments; each segment is lowercased and has its
/// hyphens replaced with underscores. Empty segments are dropped, the last
/// three remaining segments are kept, and the result is joined with `_`.
///
/// A URL without path segments yields an empty string. Callers that use the
/// title as a file name must substitute their own fallback.
///
/// # Examples
///
/// ```
/// use docscrape::url::title_from_url;
///
/// assert_eq!(title_from_url("https://x.com/a/b/c/d"), "b_c_d");
/// assert_eq!(title_from_url("https://x.com/Getting-Started"), "getting_started");
/// assert_eq!(title_from_url("https://x.com/"), "");
/// ```
pub fn title_from_url(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };

    let parts: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase().replace('-', "_"))
        .collect();

    let start = parts.len().saturating_sub(TITLE_SEGMENTS);
    parts[start..].join("_")
}
