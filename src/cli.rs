use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crypto market analytics — serve a dashboard of derived market
/// statistics, export raw API previews, and scrape crypto news.
#[derive(Parser)]
#[command(name = "coinscope", version, about)]
pub struct Cli {
    /// Base URL of the market data API
    #[arg(long, global = true, default_value = coinscope::client::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the market analytics dashboard
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Path to a panel configuration JSON file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print 24h gainers, losers, and volume leaders to stdout
    Summary {
        /// Number of assets to rank
        #[arg(long, default_value = "100")]
        limit: u32,

        /// Rows per table
        #[arg(long, default_value = "3")]
        count: usize,
    },

    /// Fetch preview data from every API resource and write timestamped CSVs
    Export {
        /// Output directory (CSVs land under <out-dir>/raw)
        #[arg(long, default_value = "crypto_data")]
        out_dir: PathBuf,

        /// Row limit per resource
        #[arg(long, default_value = "1000")]
        limit: u32,
    },

    /// Crawl the crypto news listing and scrape articles to CSV
    ScrapeNews {
        /// Stop after this page number
        #[arg(long)]
        stop_at_page: Option<u32>,

        /// Stop after scraping this many articles
        #[arg(long)]
        stop_at_article_count: Option<usize>,

        /// Directory to write the output CSV into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Delay between HTTP requests, in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },
}
