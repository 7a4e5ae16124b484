//! Page log for resumable runs
//!
//! Every fetch attempt is recorded as a [`ScrapingPage`] row in a CSV file
//! (`logs.csv` inside the domain directory). The log is loaded once per run,
//! consulted before each fetch through the skip policy, and appended to after
//! each attempt. Rows are never rewritten or compacted.

mod record;
mod skip;
mod store;

pub use record::{PageStatus, ScrapingPage};
pub use skip::should_skip;
pub use store::{PageLog, LOG_FILE_NAME, LOG_HEADER};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the page log
#[derive(Debug, Error)]
pub enum PageLogError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed page log {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Unexpected header in page log {path}: expected '{expected}', found '{found}'")]
    HeaderDrift {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

/// Result type for page log operations
pub type PageLogResult<T> = Result<T, PageLogError>;
