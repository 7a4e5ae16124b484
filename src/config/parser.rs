use crate::config::types::{
    ConfigFile, OutputConfig, ScrapeConfig, SelectorSection, DEFAULT_CONTENT_TAG,
    DEFAULT_LINK_TAG,
};
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ConfigFile)` - Successfully loaded configuration layer
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docscrape::config::load_config_file;
///
/// let file = load_config_file(Path::new("docscrape.toml")).unwrap();
/// println!("Link tag: {:?}", file.link_selector.tag);
/// ```
pub fn load_config_file(path: &Path) -> ConfigResult<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file)
}

/// Merges the configuration layers into a validated [`ScrapeConfig`]
///
/// Selector values given on the command line override those from the file,
/// which in turn override the built-in defaults.
///
/// # Arguments
///
/// * `url` - The seed URL
/// * `output` - Output settings
/// * `file` - Configuration file layer (or `ConfigFile::default()`)
/// * `link_overrides` - Command-line link selector values
/// * `content_overrides` - Command-line content selector values
pub fn build_config(
    url: &str,
    output: OutputConfig,
    file: ConfigFile,
    link_overrides: SelectorSection,
    content_overrides: SelectorSection,
) -> ConfigResult<ScrapeConfig> {
    let config = ScrapeConfig {
        url: normalize_seed_url(url),
        output,
        link_selector: file
            .link_selector
            .overlay(link_overrides)
            .into_selector(DEFAULT_LINK_TAG),
        content_selector: file
            .content_selector
            .overlay(content_overrides)
            .into_selector(DEFAULT_CONTENT_TAG),
        fetch: file.fetch,
    };

    validate(&config)?;

    Ok(config)
}

/// Puts the seed URL in the form link hrefs are compared in
///
/// Unparsable input is returned trimmed so validation can report it.
fn normalize_seed_url(url: &str) -> String {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => trimmed.to_string(),
    }
}
