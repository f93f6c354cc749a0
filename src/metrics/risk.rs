use anyhow::{Context, Result};
use serde::Serialize;

use crate::client::MarketClient;
use crate::model::{Asset, Interval};

use super::fetch::{self, FetchPolicy};
use super::volatility::volatility;

/// One point of the market-cap vs. volatility scatter.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRow {
    pub name: String,
    pub market_cap_usd: f64,
    pub volatility_pct: f64,
    pub volume_usd_24h: f64,
    pub change_percent_24h: f64,
}

/// Fetch each asset's history over the lookback window and compute its
/// volatility. Fail-fast: one failed member aborts the whole profile
/// (FetchPolicy::FailFast — the panel is meaningless with holes in it).
pub async fn risk_profile(
    client: &MarketClient,
    assets: &[Asset],
    lookback_days: u32,
    interval: Interval,
) -> Result<Vec<RiskRow>> {
    let (start_ms, end_ms) = fetch::lookback_window_ms(lookback_days);
    let ids: Vec<String> = assets.iter().map(|a| a.id.clone()).collect();
    let fetched = fetch::fetch_many_histories(
        client,
        &ids,
        interval,
        start_ms,
        end_ms,
        FetchPolicy::FailFast,
    )
    .await?;

    let mut rows = Vec::with_capacity(assets.len());
    for (asset, (_, outcome)) in assets.iter().zip(fetched) {
        // FailFast already aborted on any fetch error.
        let points = outcome.map_err(anyhow::Error::msg)?;
        let vol = volatility(&points)
            .with_context(|| format!("computing volatility for {}", asset.id))?;

        rows.push(RiskRow {
            name: asset.name.clone(),
            market_cap_usd: asset.market_cap_usd,
            volatility_pct: vol,
            volume_usd_24h: asset.volume_usd_24h,
            change_percent_24h: asset.change_percent_24h,
        });
    }

    Ok(rows)
}
