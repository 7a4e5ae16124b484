//! CSV-backed page log
//!
//! The file is opened, appended to and closed for every write, so each row is
//! durable on its own. A single writer per file is assumed.

use crate::page_log::record::{PageStatus, ScrapingPage};
use crate::page_log::skip::should_skip;
use crate::page_log::{PageLogError, PageLogResult};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// File name of the page log inside a domain directory
pub const LOG_FILE_NAME: &str = "logs.csv";

/// Header row of the page log
pub const LOG_HEADER: [&str; 6] = ["timestamp", "url", "html_path", "status", "title", "domain"];

/// In-memory view of the page log, mirrored to its CSV file
///
/// The in-memory list is authoritative for the duration of a run. Every
/// append writes the file first and then the list, within the same call.
#[derive(Debug)]
pub struct PageLog {
    path: PathBuf,
    pages: Vec<ScrapingPage>,
}

impl PageLog {
    /// Loads an existing log, or creates a new one containing only the header
    ///
    /// # Errors
    ///
    /// Fails loudly on a malformed row or on a header that differs from
    /// [`LOG_HEADER`]; rows are never silently dropped.
    pub fn load_or_create(path: &Path) -> PageLogResult<Self> {
        let is_empty = match std::fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(source) => {
                return Err(PageLogError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if is_empty {
            write_header(path)?;
            tracing::debug!("Created page log at {}", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                pages: Vec::new(),
            });
        }

        let pages = read_pages(path)?;
        tracing::info!(
            "Loaded {} page log entries from {}",
            pages.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            pages,
        })
    }

    /// Appends an entry to the file and then to the in-memory list
    pub fn append(&mut self, entry: ScrapingPage) -> PageLogResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(&entry)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        tracing::debug!("Logged {} as {}", entry.url, entry.status);
        self.pages.push(entry);

        Ok(())
    }

    /// Applies the skip policy to `url` using this log
    pub fn should_skip(&self, url: &str, overwrite: bool) -> bool {
        should_skip(url, Some(self.pages.as_slice()), overwrite)
    }

    /// All entries for `url`, in append order
    pub fn entries_for<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a ScrapingPage> + 'a {
        self.pages.iter().filter(move |page| page.url == url)
    }

    /// Whether `url` appears in the log at all
    pub fn has_entry(&self, url: &str) -> bool {
        self.entries_for(url).next().is_some()
    }

    /// The most recent successful entry for `url`
    pub fn latest_success(&self, url: &str) -> Option<&ScrapingPage> {
        self.pages
            .iter()
            .rev()
            .find(|page| page.url == url && page.status == PageStatus::Success)
    }

    pub fn pages(&self) -> &[ScrapingPage] {
        &self.pages
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn io_error(&self, source: std::io::Error) -> PageLogError {
        PageLogError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> PageLogError {
        PageLogError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_header(path: &Path) -> PageLogResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| PageLogError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_record(LOG_HEADER)
        .map_err(|source| PageLogError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| PageLogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_pages(path: &Path) -> PageLogResult<Vec<ScrapingPage>> {
    let csv_error = |source| PageLogError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?;
    if headers.iter().ne(LOG_HEADER.iter().copied()) {
        return Err(PageLogError::HeaderDrift {
            path: path.to_path_buf(),
            expected: LOG_HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    reader
        .deserialize::<ScrapingPage>()
        .map(|row| row.map_err(csv_error))
        .collect()
}
