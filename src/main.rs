//! Sitescribe main entry point
//!
//! Command-line interface for the bounded same-domain text scraper.

use clap::Parser;
use sitescribe::config::{load_config_with_hash, Config};
use sitescribe::crawler::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitescribe: distill a website into a single knowledge-base text file
///
/// Sitescribe crawls a site breadth-first from a seed URL, follows only
/// same-host links, extracts readable text from each HTML page, and writes
/// everything into one plain-text document.
#[derive(Parser, Debug)]
#[command(name = "sitescribe")]
#[command(version)]
#[command(about = "Bounded same-domain text scraper", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file path (overrides the configured knowledge-base path)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Page budget (overrides the configured maximum)
    #[arg(short, long, value_name = "N")]
    max_pages: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the seed and configuration without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to built-in defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // CLI flags override the config file
    if let Some(output) = cli.output {
        config.output.knowledge_base_path = output;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }

    if cli.dry_run {
        handle_dry_run(&cli.seed_url, &config);
        return Ok(());
    }

    let result = scrape(&cli.seed_url, config).await;

    if result.success {
        println!("{}", result.message);
        Ok(())
    } else {
        eprintln!("Scrape failed: {}", result.message);
        std::process::exit(1);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitescribe=info,warn"),
            1 => EnvFilter::new("sitescribe=debug,info"),
            2 => EnvFilter::new("sitescribe=trace,debug"),
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

/// Handles --dry-run: shows what a crawl would do without fetching anything
fn handle_dry_run(seed_url: &str, config: &Config) {
    println!("=== Sitescribe Dry Run ===\n");

    println!("Seed URL: {}", seed_url);

    println!("\nCrawler Configuration:");
    println!("  Page budget: {}", config.crawler.max_pages);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!(
        "  Politeness delay: {}ms",
        config.crawler.politeness_delay_ms
    );

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Knowledge base: {}", config.output.knowledge_base_path);

    match url::Url::parse(seed_url) {
        Ok(seed) => match seed.host_str() {
            Some(host) => {
                println!("\n✓ Seed URL is valid");
                println!("✓ Would follow links on host: {}", host);
            }
            None => println!("\n✗ Seed URL has no host"),
        },
        Err(e) => println!("\n✗ Seed URL is invalid: {}", e),
    }
}
