use anyhow::{Context, Result};

use crate::client::MarketClient;
use crate::metrics::{MoverRow, top_movers};
use crate::model::asset;

/// Run the `summary` command: fetch the listing, rank it, print the three
/// tables.
pub fn run(base_url: &str, limit: u32, count: usize) -> Result<()> {
    let client = MarketClient::new(base_url).context("creating market data client")?;

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let records = rt
        .block_on(client.assets(limit))
        .context("fetching asset listing")?;
    let assets = asset::parse_assets(records)?;
    let movers = top_movers(&assets, count);

    print_table(&format!("Gainers (24h, top {count})"), &movers.gainers, "%");
    print_table(&format!("Losers (24h, top {count})"), &movers.losers, "%");
    print_volume_table(
        &format!("Volume leaders (24h, top {count})"),
        &movers.volume_leaders,
    );

    Ok(())
}

fn print_table(title: &str, rows: &[MoverRow], suffix: &str) {
    println!("{title}");
    for row in rows {
        println!("  {} ({})  {:.2}{suffix}", row.name, row.symbol, row.value);
    }
    println!();
}

fn print_volume_table(title: &str, rows: &[MoverRow]) {
    println!("{title}");
    for row in rows {
        println!("  {} ({})  ${:.0}", row.name, row.symbol, row.value);
    }
    println!();
}
