use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default container tag for navigation links
pub const DEFAULT_LINK_TAG: &str = "nav";

/// Default container tag for page content
pub const DEFAULT_CONTENT_TAG: &str = "div";

/// Default endpoint of the rendering proxy API
pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.scrapingant.com/v2/general";

/// Fully merged configuration for a single scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Seed URL whose navigation links are followed
    pub url: String,
    pub output: OutputConfig,
    pub link_selector: SelectorConfig,
    pub content_selector: SelectorConfig,
    pub fetch: FetchConfig,
}

/// Where and how results are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Parent directory; a per-domain directory is created inside it
    pub output_dir: PathBuf,

    /// Persist the raw HTML of every fetched page
    pub save_html: bool,

    /// Retry URLs whose only log entries are failures
    pub overwrite: bool,
}

/// Matches an HTML element by tag plus optional class, id and role
///
/// At most one of `class_name` / `class_contains` is meaningful. When both
/// are set, `class_name` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub tag: String,
    pub class_name: Option<String>,
    pub class_contains: Option<String>,
    pub id: Option<String>,
    pub role: Option<String>,
}

/// Class attribute predicate derived from a [`SelectorConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMatch {
    /// No class filter
    Any,
    /// One of the element's classes (or the whole attribute) equals the value
    Exact(String),
    /// The class attribute contains the value as a substring
    Contains(String),
}

impl ClassMatch {
    /// Evaluates the predicate against an element's raw class attribute
    pub fn matches(&self, class_attr: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => class_attr.is_some_and(|attr| {
                attr == wanted || attr.split_ascii_whitespace().any(|c| c == wanted)
            }),
            Self::Contains(needle) => class_attr.is_some_and(|attr| attr.contains(needle.as_str())),
        }
    }
}

impl SelectorConfig {
    /// Creates a selector that matches on tag alone
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_name: None,
            class_contains: None,
            id: None,
            role: None,
        }
    }

    /// Default selector for the navigation container
    pub fn link_default() -> Self {
        Self::new(DEFAULT_LINK_TAG)
    }

    /// Default selector for content regions
    pub fn content_default() -> Self {
        Self::new(DEFAULT_CONTENT_TAG)
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_class_contains(mut self, needle: impl Into<String>) -> Self {
        self.class_contains = Some(needle.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builds the class predicate; an exact class takes precedence
    pub fn class_match(&self) -> ClassMatch {
        match (&self.class_name, &self.class_contains) {
            (Some(exact), _) => ClassMatch::Exact(exact.clone()),
            (None, Some(needle)) => ClassMatch::Contains(needle.clone()),
            (None, None) => ClassMatch::Any,
        }
    }
}

/// One selector section as it appears in the TOML file or on the command line
///
/// Every field is optional so that sections can be layered: values set in a
/// later layer replace those of an earlier one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SelectorSection {
    pub tag: Option<String>,
    pub class_name: Option<String>,
    pub class_contains: Option<String>,
    pub id: Option<String>,
    pub role: Option<String>,
}

impl SelectorSection {
    /// Layers `other` on top of `self`
    pub fn overlay(self, other: SelectorSection) -> SelectorSection {
        SelectorSection {
            tag: other.tag.or(self.tag),
            class_name: other.class_name.or(self.class_name),
            class_contains: other.class_contains.or(self.class_contains),
            id: other.id.or(self.id),
            role: other.role.or(self.role),
        }
    }

    /// Resolves the section into a selector, filling in the default tag
    pub fn into_selector(self, default_tag: &str) -> SelectorConfig {
        SelectorConfig {
            tag: self.tag.unwrap_or_else(|| default_tag.to_string()),
            class_name: self.class_name,
            class_contains: self.class_contains,
            id: self.id,
            role: self.role,
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FetchConfig {
    /// User-Agent header sent by the direct HTTP backend
    pub user_agent: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Endpoint of the rendering proxy API
    pub proxy_endpoint: String,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("docscrape/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            proxy_endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
            headers: BTreeMap::new(),
        }
    }
}

/// Contents of the optional TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub link_selector: SelectorSection,

    #[serde(default)]
    pub content_selector: SelectorSection,

    #[serde(default)]
    pub fetch: FetchConfig,
}
