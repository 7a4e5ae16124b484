use chrono::Local;
use std::path::{Path, PathBuf};

/// Name of the raw HTML directory inside a domain directory
pub const HTML_DIR_NAME: &str = "html";

/// Saves raw markup for debugging
///
/// The file is named `{title}_{YYYYMMDD_HHMMSS}.html`. The directory is
/// created if needed.
///
/// # Returns
///
/// The path of the written file
pub fn save_html(dir: &Path, title: &str, html: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.html", title, timestamp));

    if let Err(e) = std::fs::write(&path, html) {
        tracing::error!("Failed to save HTML to {}: {}", path.display(), e);
        return Err(e);
    }

    tracing::debug!("Saved HTML to {}", path.display());
    Ok(path)
}
