use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coinscope=info")),
        )
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Serve { host, port, config } => {
            coinscope::dashboard::run(&cli.base_url, &host, port, config.as_deref())
        }
        cli::Command::Summary { limit, count } => {
            coinscope::summary::run(&cli.base_url, limit, count)
        }
        cli::Command::Export { out_dir, limit } => {
            coinscope::export::run(&cli.base_url, &out_dir, limit)
        }
        cli::Command::ScrapeNews {
            stop_at_page,
            stop_at_article_count,
            out_dir,
            delay_ms,
        } => coinscope::scrape::run(&coinscope::scrape::ScrapeOptions {
            stop_at_page,
            stop_at_article_count,
            out_dir,
            delay_ms,
        }),
    }
}
