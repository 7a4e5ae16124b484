//! docscrape main entry point
//!
//! This is the command-line interface for the docscrape documentation scraper.

use clap::Parser;
use docscrape::config::{
    build_config, default_output_dir, load_config_file, ConfigFile, OutputConfig, ScrapeConfig,
    SelectorSection,
};
use docscrape::crawler::run_scrape;
use docscrape::fetch::build_fetcher;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// docscrape: scrape a documentation site into a single text file
///
/// docscrape fetches the seed page, follows every link in its navigation
/// container, and appends the text of each linked page to
/// `<output-dir>/<domain>/<title>.txt`. A page log in the same directory
/// lets interrupted runs resume where they stopped.
#[derive(Parser, Debug)]
#[command(name = "docscrape")]
#[command(version)]
#[command(about = "Scrape a documentation site into a single text file", long_about = None)]
struct Cli {
    /// Seed URL whose navigation links are followed
    #[arg(value_name = "URL")]
    url: String,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// API key for the rendering proxy
    #[arg(long, env = "SCRAPING_ANT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Parent directory for the per-domain output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Tag of the navigation container
    #[arg(long)]
    link_tag: Option<String>,

    /// Exact class of the navigation container
    #[arg(long)]
    link_class_name: Option<String>,

    /// Substring of the navigation container's class attribute
    #[arg(short = 'c', long)]
    link_class_contains: Option<String>,

    /// Id of the navigation container
    #[arg(long)]
    link_id: Option<String>,

    /// Save the raw HTML of every fetched page
    #[arg(long)]
    save_html: bool,

    /// Retry pages whose previous attempts all failed
    #[arg(long)]
    overwrite: bool,

    /// Fetch pages through the rendering proxy (needs --api-key)
    #[arg(long, alias = "use-scraping-ant", requires = "api_key")]
    use_proxy: bool,

    /// Tag of the content regions
    #[arg(long)]
    text_tag: Option<String>,

    /// Exact class of the content regions
    #[arg(long)]
    text_class_name: Option<String>,

    /// Substring of the content regions' class attribute
    #[arg(long)]
    text_class_contains: Option<String>,

    /// Id of the content regions
    #[arg(long)]
    text_id: Option<String>,

    /// ARIA role of the content regions
    #[arg(long)]
    text_role: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn link_overrides(&self) -> SelectorSection {
        SelectorSection {
            tag: self.link_tag.clone(),
            class_name: self.link_class_name.clone(),
            class_contains: self.link_class_contains.clone(),
            id: self.link_id.clone(),
            role: None,
        }
    }

    fn content_overrides(&self) -> SelectorSection {
        SelectorSection {
            tag: self.text_tag.clone(),
            class_name: self.text_class_name.clone(),
            class_contains: self.text_class_contains.clone(),
            id: self.text_id.clone(),
            role: self.text_role.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config_file(path)?
        }
        None => ConfigFile::default(),
    };

    let output = OutputConfig {
        output_dir: cli.output_dir.clone().unwrap_or_else(default_output_dir),
        save_html: cli.save_html,
        overwrite: cli.overwrite,
    };

    let config = build_config(
        &cli.url,
        output,
        file,
        cli.link_overrides(),
        cli.content_overrides(),
    )?;
    log_options(&config, cli.use_proxy);

    let fetcher = build_fetcher(&config.fetch, cli.use_proxy, cli.api_key.as_deref())?;
    let summary = run_scrape(config, fetcher).await?;

    if summary.seed_skipped {
        return Ok(());
    }

    tracing::info!(
        "Links found: {}, processed: {}, skipped: {}, failed: {}",
        summary.links_found,
        summary.processed,
        summary.skipped,
        summary.failed
    );
    if let Some(path) = &summary.output_path {
        tracing::info!("Content saved to {}", path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docscrape=info,warn"),
            1 => EnvFilter::new("docscrape=debug,info"),
            2 => EnvFilter::new("docscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Logs the effective options; the API key is never printed
fn log_options(config: &ScrapeConfig, use_proxy: bool) {
    tracing::info!("Scraping {}", config.url);
    tracing::info!("  Output directory: {}", config.output.output_dir.display());
    tracing::info!("  Save HTML: {}", config.output.save_html);
    tracing::info!("  Overwrite failed pages: {}", config.output.overwrite);
    tracing::info!("  Use proxy: {}", use_proxy);
    tracing::info!("  Link selector: {:?}", config.link_selector);
    tracing::info!("  Content selector: {:?}", config.content_selector);
}
