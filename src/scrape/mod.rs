pub mod article;

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use article::ArticleRow;

const LISTING_BASE: &str = "https://cryptonews.net/";
// The site serves bot-looking agents an empty shell.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub stop_at_page: Option<u32>,
    pub stop_at_article_count: Option<usize>,
    pub out_dir: PathBuf,
    pub delay_ms: u64,
}

/// Run the `scrape-news` command: crawl listing pages, scrape each new
/// article, write one CSV for the run.
pub fn run(opts: &ScrapeOptions) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    rt.block_on(crawl(opts))
}

async fn crawl(opts: &ScrapeOptions) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(BROWSER_USER_AGENT)
        .build()
        .context("creating HTTP client")?;

    let delay = Duration::from_millis(opts.delay_ms);
    let mut seen: HashSet<String> = HashSet::new();
    let mut rows: Vec<ArticleRow> = Vec::new();
    let mut page: u32 = 1;

    'pages: loop {
        let page_url = if page > 1 {
            format!("{LISTING_BASE}?page={page}")
        } else {
            LISTING_BASE.to_string()
        };
        tracing::info!(%page_url, page, "fetching listing page");

        let listing_html = match fetch_text(&client, &page_url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(%page_url, error = %format!("{e:#}"), "failed to retrieve listing page");
                break;
            }
        };

        let new_ids: Vec<String> = article::listing_article_ids(&listing_html)
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        if new_ids.is_empty() {
            tracing::info!("no new articles found, stopping");
            break;
        }
        tracing::info!(count = new_ids.len(), page, "found articles on page");

        for data_id in &new_ids {
            tokio::time::sleep(delay).await;
            let article_url = format!("https://cryptonews.net{data_id}");

            let article_html = match fetch_text(&client, &article_url).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(%article_url, error = %format!("{e:#}"), "failed to retrieve article");
                    continue;
                }
            };

            match article::parse_article(&article_html, &article_url, data_id, chrono::Utc::now())
            {
                Some(row) => {
                    tracing::info!(%article_url, status = ?row.status, "scraped article");
                    rows.push(row);
                }
                None => {
                    tracing::info!(%article_url, "article missing title or body, skipping");
                }
            }

            if let Some(limit) = opts.stop_at_article_count
                && rows.len() >= limit
            {
                tracing::info!(limit, "reached article limit, stopping");
                break 'pages;
            }
        }

        if let Some(last) = opts.stop_at_page
            && page >= last
        {
            tracing::info!(last, "reached page limit, stopping");
            break;
        }

        page += 1;
        tokio::time::sleep(delay).await;
    }

    if rows.is_empty() {
        tracing::error!("no articles scraped, nothing to save");
        return Ok(());
    }

    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating output directory {}", opts.out_dir.display()))?;
    let datestamp = chrono::Utc::now().format("%Y%m%d");
    let path = opts.out_dir.join(format!("cryptonews_net_{datestamp}.csv"));

    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    tracing::info!(articles = rows.len(), path = %path.display(), "saved scrape run");
    println!("Saved {} articles to {}", rows.len(), path.display());
    Ok(())
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
