//! Append-only text file of scraped pages
//!
//! Each page is written as:
//!
//! ```text
//! <TITLE>{title}</TITLE>
//!
//! <CONTENT>{fragment}</CONTENT>
//! <END_OF_CONTENT></END_OF_CONTENT>
//!
//! ```

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Written once, when the file is created
pub const FILE_HEADER: &str = "SCRAPED CONTENT\n\n";

/// Formats one page block
pub fn format_page(title: &str, fragments: &[String]) -> String {
    let mut block = format!("<TITLE>{}</TITLE>\n\n", title);
    for fragment in fragments {
        block.push_str(&format!("<CONTENT>{}</CONTENT>\n", fragment));
    }
    block.push_str("<END_OF_CONTENT></END_OF_CONTENT>\n\n");
    block
}

/// Handle to the output text file
///
/// The file is opened and closed for every write.
#[derive(Debug, Clone)]
pub struct ContentFile {
    path: PathBuf,
}

impl ContentFile {
    /// Opens the file, creating it with [`FILE_HEADER`] if it does not exist
    pub fn open_or_create(path: &Path) -> std::io::Result<Self> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(FILE_HEADER.as_bytes())?;
                tracing::debug!("Created output file {}", path.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!("Appending to existing output file {}", path.display());
            }
            Err(e) => return Err(e),
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Appends one page block
    pub fn append_page(&self, title: &str, fragments: &[String]) -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(format_page(title, fragments).as_bytes())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
