//! Run orchestration
//!
//! All work is sequential: the seed fetch and every per-link fetch happen one
//! at a time. The output file and the page log are each reopened for every
//! write.

use crate::config::{ScrapeConfig, SelectorConfig};
use crate::extract::{extract_links, extract_text, parse_document, Link};
use crate::fetch::{build_headers, Fetcher};
use crate::output::{save_html, ContentFile, HTML_DIR_NAME};
use crate::page_log::{PageLog, PageStatus, ScrapingPage, LOG_FILE_NAME};
use crate::url::{dir_name_from_url, title_from_url};
use crate::ScrapeError;
use reqwest::header::HeaderMap;
use std::path::{Path, PathBuf};

/// Title used when a URL has no path segments
pub const FALLBACK_TITLE: &str = "index";

/// Prefix of the seed page's HTML dump
const SEED_DUMP_PREFIX: &str = "BASE_";

/// Outcome of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// The seed was already in the log; nothing else was done
    pub seed_skipped: bool,
    /// Unique links found in the navigation container
    pub links_found: usize,
    /// Links fetched and written to the output file
    pub processed: usize,
    /// Links skipped by the page log
    pub skipped: usize,
    /// Links whose processing failed
    pub failed: usize,
    /// Output text file, when the run got that far
    pub output_path: Option<PathBuf>,
}

/// Main run coordinator
pub struct Coordinator {
    config: ScrapeConfig,
    fetcher: Box<dyn Fetcher>,
    headers: HeaderMap,
    domain_dir: PathBuf,
    html_dir: Option<PathBuf>,
    page_log: PageLog,
}

impl Coordinator {
    /// Prepares the domain directory and loads the page log
    ///
    /// # Arguments
    ///
    /// * `config` - Validated run configuration
    /// * `fetcher` - Fetch backend
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScrapeError)` - The directory could not be created or the log
    ///   could not be read
    pub fn new(config: ScrapeConfig, fetcher: Box<dyn Fetcher>) -> crate::Result<Self> {
        let domain_dir = config.output.output_dir.join(dir_name_from_url(&config.url));
        std::fs::create_dir_all(&domain_dir).map_err(|source| ScrapeError::OutputDir {
            path: domain_dir.clone(),
            source,
        })?;

        let html_dir = if config.output.save_html {
            let dir = domain_dir.join(HTML_DIR_NAME);
            std::fs::create_dir_all(&dir).map_err(|source| ScrapeError::OutputDir {
                path: dir.clone(),
                source,
            })?;
            Some(dir)
        } else {
            None
        };

        let page_log = PageLog::load_or_create(&domain_dir.join(LOG_FILE_NAME))?;
        let headers = build_headers(&config.fetch.headers)?;

        Ok(Self {
            config,
            fetcher,
            headers,
            domain_dir,
            html_dir,
            page_log,
        })
    }

    /// Runs the scrape
    pub async fn run(&mut self) -> crate::Result<RunSummary> {
        let seed_url = self.config.url.clone();
        let overwrite = self.config.output.overwrite;
        let mut summary = RunSummary::default();

        if self.page_log.should_skip(&seed_url, overwrite) {
            tracing::info!(
                "Base URL already processed. Use --overwrite to retry failed pages."
            );
            summary.seed_skipped = true;
            return Ok(summary);
        }

        let seed_title = page_title(&seed_url);
        let output_path = self.domain_dir.join(format!("{}.txt", seed_title));
        let output = ContentFile::open_or_create(&output_path)?;
        tracing::info!("Output will be saved to: {}", output_path.display());
        summary.output_path = Some(output_path);

        // Seed page: any failure here aborts the run
        let response = match self.fetcher.fetch(&seed_url, Some(&self.headers)).await {
            Ok(response) => response,
            Err(source) => {
                self.page_log
                    .append(ScrapingPage::failed(&seed_url, &seed_title))?;
                return Err(ScrapeError::SeedFetch {
                    url: seed_url,
                    source,
                });
            }
        };

        let debug_path = self.dump_html(
            &format!("{}{}", SEED_DUMP_PREFIX, seed_title),
            &response.content,
        )?;
        let html_path = debug_path.as_deref().map(path_string);

        // A seed without links is logged as failed so --overwrite can retry it
        let links = discover_links(&response.content, &seed_url, &self.config.link_selector);
        if links.is_empty() {
            self.page_log.append(ScrapingPage::create(
                &seed_url,
                html_path,
                &seed_title,
                PageStatus::Failed,
            ))?;
            return Err(ScrapeError::NoLinks {
                url: seed_url,
                debug_path,
            });
        }
        self.page_log
            .append(ScrapingPage::success(&seed_url, html_path, &seed_title))?;
        summary.links_found = links.len();
        tracing::info!("Found {} navigation links", links.len());

        for (index, link) in links.iter().enumerate() {
            if self.page_log.should_skip(&link.href, overwrite) {
                summary.skipped += 1;
                continue;
            }

            tracing::info!("[{}/{}] Extracting {}", index + 1, links.len(), link.href);

            match self.process_link(link, &output).await {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    tracing::error!("Failed to scrape {}: {}", link.href, e);
                    self.page_log
                        .append(ScrapingPage::failed(&link.href, link_title(link)))?;
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Run complete: {} processed, {} skipped, {} failed",
            summary.processed,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    /// Fetches one linked page, appends its content and logs it
    async fn process_link(&mut self, link: &Link, output: &ContentFile) -> crate::Result<()> {
        let response = self.fetcher.fetch(&link.href, Some(&self.headers)).await?;
        let title = link_title(link);

        let html_path = self.dump_html(title, &response.content)?;

        let fragments = extract_content(&response.content, &self.config.content_selector);
        if fragments.is_empty() {
            tracing::warn!(
                "No content matching <{}> on {}",
                self.config.content_selector.tag,
                link.href
            );
        }

        output.append_page(title, &fragments)?;
        self.page_log.append(ScrapingPage::success(
            &link.href,
            html_path.as_deref().map(path_string),
            title,
        ))?;

        Ok(())
    }

    /// Writes the raw markup when HTML dumps are enabled
    fn dump_html(&self, title: &str, html: &str) -> crate::Result<Option<PathBuf>> {
        match &self.html_dir {
            Some(dir) => Ok(Some(save_html(dir, title, html)?)),
            None => Ok(None),
        }
    }

    /// The page log backing this run
    pub fn page_log(&self) -> &PageLog {
        &self.page_log
    }

    /// Per-domain directory holding the log and output file
    pub fn domain_dir(&self) -> &Path {
        &self.domain_dir
    }
}

fn page_title(url: &str) -> String {
    let title = title_from_url(url);
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

fn link_title(link: &Link) -> &str {
    if link.title.is_empty() {
        FALLBACK_TITLE
    } else {
        &link.title
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

// Parsing stays in synchronous helpers so no document is held across an await
fn discover_links(html: &str, base_url: &str, selector: &SelectorConfig) -> Vec<Link> {
    let document = parse_document(html);
    extract_links(&document, base_url, selector)
}

fn extract_content(html: &str, selector: &SelectorConfig) -> Vec<String> {
    let document = parse_document(html);
    extract_text(&document, selector)
}
