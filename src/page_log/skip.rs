use crate::page_log::record::ScrapingPage;

/// Decides whether a URL should be skipped given the prior log entries
///
/// | Prior entries for `url` | `overwrite = false` | `overwrite = true` |
/// |---|---|---|
/// | no log / none | fetch | fetch |
/// | at least one `success` | skip | skip |
/// | only `failed` | skip | fetch |
///
/// A completed page is never redone; `overwrite` only retries failures.
pub fn should_skip(url: &str, pages: Option<&[ScrapingPage]>, overwrite: bool) -> bool {
    let Some(pages) = pages else {
        return false;
    };

    let mut seen = false;
    for page in pages.iter().filter(|page| page.url == url) {
        if page.status.is_success() {
            tracing::info!("Skipping already processed URL: {}", url);
            return true;
        }
        seen = true;
    }

    if seen && !overwrite {
        tracing::info!(
            "Skipping previously failed URL (use --overwrite to retry): {}",
            url
        );
        return true;
    }

    false
}
