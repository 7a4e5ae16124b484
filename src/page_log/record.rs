use crate::url::extract_domain;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Success,
    Failed,
}

impl PageStatus {
    /// Returns the value stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the page log
///
/// Field order matches the CSV header
/// `timestamp,url,html_path,status,title,domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapingPage {
    /// Creation time, RFC 3339
    pub timestamp: String,
    pub url: String,
    /// Set only when the raw HTML was persisted
    pub html_path: Option<String>,
    pub status: PageStatus,
    pub title: String,
    /// Network authority of `url`
    pub domain: String,
}

impl ScrapingPage {
    /// Creates an entry stamped with the current time
    pub fn create(
        url: impl Into<String>,
        html_path: Option<String>,
        title: impl Into<String>,
        status: PageStatus,
    ) -> Self {
        let url = url.into();
        Self {
            timestamp: Utc::now().to_rfc3339(),
            domain: extract_domain(&url),
            url,
            html_path,
            status,
            title: title.into(),
        }
    }

    pub fn success(url: impl Into<String>, html_path: Option<String>, title: impl Into<String>) -> Self {
        Self::create(url, html_path, title, PageStatus::Success)
    }

    pub fn failed(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::create(url, None, title, PageStatus::Failed)
    }
}
