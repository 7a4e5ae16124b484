use crate::config::types::{FetchConfig, ScrapeConfig, SelectorConfig};
use crate::{ConfigError, ConfigResult};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &ScrapeConfig) -> ConfigResult<()> {
    validate_seed_url(&config.url)?;
    validate_selector("link-selector", &config.link_selector)?;
    validate_selector("content-selector", &config.content_selector)?;
    validate_link_selector(&config.link_selector)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates the seed URL: must be absolute HTTP(S) with a host
fn validate_seed_url(url: &str) -> ConfigResult<()> {
    let parsed = Url::parse(url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use the http or https scheme",
            url
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            url
        )));
    }

    Ok(())
}

/// Validates one selector
fn validate_selector(section: &str, selector: &SelectorConfig) -> ConfigResult<()> {
    validate_tag(section, &selector.tag)?;

    let optional_fields = [
        ("class-name", &selector.class_name),
        ("class-contains", &selector.class_contains),
        ("id", &selector.id),
        ("role", &selector.role),
    ];
    for (field, value) in optional_fields {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{}.{} cannot be empty",
                section, field
            )));
        }
    }

    if selector.class_name.is_some() && selector.class_contains.is_some() {
        tracing::warn!(
            "{}: both class-name and class-contains are set; class-name takes precedence",
            section
        );
    }

    Ok(())
}

/// Validates a tag name: ASCII letters, digits and hyphens, starting with a letter
fn validate_tag(section: &str, tag: &str) -> ConfigResult<()> {
    let mut chars = tag.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "{}.tag must be an HTML tag name, got '{}'",
            section, tag
        )));
    }

    Ok(())
}

/// ARIA roles are only matched on content regions
fn validate_link_selector(selector: &SelectorConfig) -> ConfigResult<()> {
    if selector.role.is_some() {
        return Err(ConfigError::Validation(
            "link-selector does not support role".to_string(),
        ));
    }
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetch.user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 || config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(format!(
            "fetch timeouts must be at least 1 second, got timeout-secs = {}, connect-timeout-secs = {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Url::parse(&config.proxy_endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid fetch.proxy-endpoint: {}", e)))?;

    for (name, value) in &config.headers {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigError::Validation(format!("Invalid header name in fetch.headers: '{}'", name))
        })?;
        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::Validation(format!("Invalid value for header '{}'", name))
        })?;
    }

    Ok(())
}
