//! Crawler module for docscrape
//!
//! The [`Coordinator`] sequences one run:
//! 1. Skip the run if the seed page is already in the log
//! 2. Fetch the seed page and log it
//! 3. Extract navigation links from it
//! 4. For each link: check the skip policy, fetch, extract content, append
//!    it to the output file, and log the attempt

mod coordinator;

pub use coordinator::{Coordinator, RunSummary, FALLBACK_TITLE};

use crate::config::ScrapeConfig;
use crate::fetch::Fetcher;

/// Runs a complete scrape with the given backend
///
/// # Returns
///
/// * `Ok(RunSummary)` - The run finished; per-link failures are counted in
///   the summary
/// * `Err(ScrapeError)` - The run aborted (unwritable output directory, seed
///   fetch failure, no navigation links, page log error)
pub async fn run_scrape(
    config: ScrapeConfig,
    fetcher: Box<dyn Fetcher>,
) -> crate::Result<RunSummary> {
    let mut coordinator = Coordinator::new(config, fetcher)?;
    coordinator.run().await
}
