use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::client::MarketClient;
use crate::metrics::{fetch, top_movers};
use crate::model::{Interval, asset};

/// Run the `export` command: pull a preview of every API resource and write
/// one date-stamped CSV per resource under `<out_dir>/raw/`.
pub fn run(base_url: &str, out_dir: &Path, limit: u32) -> Result<()> {
    let client = MarketClient::new(base_url).context("creating market data client")?;

    let raw_dir = out_dir.join("raw");
    std::fs::create_dir_all(&raw_dir)
        .with_context(|| format!("creating output directory {}", raw_dir.display()))?;

    let datestamp = chrono::Utc::now().format("%Y%m%d").to_string();

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    rt.block_on(async {
        // Assets are typed; the remaining resources keep whatever columns
        // the API currently returns.
        let assets = client.assets(limit).await.context("fetching assets")?;
        write_rows(&raw_dir, &format!("assets_{datestamp}.csv"), &assets)?;

        tokio::time::sleep(fetch::REQUEST_SPACING).await;
        let markets = client
            .markets(limit, None)
            .await
            .context("fetching markets")?;
        write_dynamic(&raw_dir, &format!("markets_{datestamp}.csv"), &markets)?;

        tokio::time::sleep(fetch::REQUEST_SPACING).await;
        let exchanges = client.exchanges(limit).await.context("fetching exchanges")?;
        write_dynamic(&raw_dir, &format!("exchanges_{datestamp}.csv"), &exchanges)?;

        tokio::time::sleep(fetch::REQUEST_SPACING).await;
        let rates = client.rates().await.context("fetching rates")?;
        write_dynamic(&raw_dir, &format!("rates_{datestamp}.csv"), &rates)?;

        tokio::time::sleep(fetch::REQUEST_SPACING).await;
        let (start_ms, end_ms) = fetch::lookback_window_ms(30);
        let history = client
            .asset_history("bitcoin", Interval::H1, start_ms, end_ms)
            .await
            .context("fetching bitcoin history")?;
        write_rows(
            &raw_dir,
            &format!("bitcoin_history_{datestamp}.csv"),
            &history,
        )?;

        // Preview: the same ranked tables the dashboard tiles show.
        let parsed = asset::parse_assets(assets)?;
        let movers = top_movers(&parsed, 3);
        println!("gainers 24h");
        for row in &movers.gainers {
            println!("  {} ({})  {:.2}%", row.name, row.symbol, row.value);
        }
        println!("losers 24h");
        for row in &movers.losers {
            println!("  {} ({})  {:.2}%", row.name, row.symbol, row.value);
        }
        println!("top volume 24h");
        for row in &movers.volume_leaders {
            println!("  {} ({})  ${:.0}", row.name, row.symbol, row.value);
        }

        println!("\nData files saved in {}/", raw_dir.display());
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

fn write_rows<T: Serialize>(dir: &Path, filename: &str, rows: &[T]) -> Result<()> {
    let path = dir.join(filename);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    println!("  OK  {} ({} rows)", path.display(), rows.len());
    Ok(())
}

/// CSV for resources kept as raw JSON objects. Columns come from the first
/// record; these listings are homogeneous per resource.
fn write_dynamic(dir: &Path, filename: &str, rows: &[serde_json::Value]) -> Result<()> {
    let path = dir.join(filename);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;

    let headers: Vec<String> = match rows.first().and_then(|r| r.as_object()) {
        Some(obj) => obj.keys().cloned().collect(),
        None => Vec::new(),
    };
    if !headers.is_empty() {
        wtr.write_record(&headers)?;
        for row in rows {
            let record: Vec<String> = headers
                .iter()
                .map(|h| display_cell(row.get(h.as_str())))
                .collect();
            wtr.write_record(&record)?;
        }
    }
    wtr.flush()?;
    println!("  OK  {} ({} rows)", path.display(), rows.len());
    Ok(())
}

fn display_cell(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
