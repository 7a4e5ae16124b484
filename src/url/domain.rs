use url::Url;

/// Extracts the network authority (host and optional port) from a URL
///
/// The host is lowercased. Returns an empty string when the URL cannot be
/// parsed or has no host.
///
/// # Examples
///
/// ```
/// use docscrape::url::extract_domain;
///
/// assert_eq!(extract_domain("https://EXAMPLE.com/path"), "example.com");
/// assert_eq!(extract_domain("http://127.0.0.1:8080/docs"), "127.0.0.1:8080");
/// assert_eq!(extract_domain("/relative/path"), "");
/// ```
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => authority(&parsed),
        Err(_) => String::new(),
    }
}

fn authority(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host.to_lowercase(), port),
        (Some(host), None) => host.to_lowercase(),
        (None, _) => String::new(),
    }
}

/// Derives a stable per-domain directory name from a URL
///
/// # Rules
///
/// 1. Take the network authority and lowercase it
/// 2. Strip a leading `www.`
/// 3. Replace every run of non-alphanumeric characters with a single `_`
/// 4. Trim leading and trailing underscores
///
/// # Examples
///
/// ```
/// use docscrape::url::dir_name_from_url;
///
/// assert_eq!(dir_name_from_url("https://www.Example.com/path"), "example_com");
/// assert_eq!(dir_name_from_url("http://127.0.0.1:8080/"), "127_0_0_1_8080");
/// ```
pub fn dir_name_from_url(url: &str) -> String {
    let netloc = match Url::parse(url) {
        Ok(parsed) => authority(&parsed),
        // Best effort: whatever sits between "://" and the next '/'
        Err(_) => {
            let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
            rest.split('/').next().unwrap_or("").to_lowercase()
        }
    };

    let netloc = netloc.strip_prefix("www.").unwrap_or(&netloc);

    let mut name = String::with_capacity(netloc.len());
    let mut in_separator_run = false;
    for c in netloc.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            name.push('_');
            in_separator_run = true;
        }
    }

    name.trim_matches('_').to_string()
}
