use std::time::Duration;

use anyhow::{Context, Result};

use crate::client::MarketClient;
use crate::model::{HistoryPoint, Interval, history};

/// Courtesy delay between per-asset history requests inside a panel loop.
pub const REQUEST_SPACING: Duration = Duration::from_millis(200);

/// What a multi-asset fetch loop does when one member fails. The policy is
/// the caller's, not the call site's: the risk profile aborts the panel,
/// group performance drops the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    FailFast,
    SkipFailed,
}

/// `[now - lookback_days, now]` as epoch milliseconds.
pub fn lookback_window_ms(lookback_days: u32) -> (i64, i64) {
    let end = chrono::Utc::now().timestamp_millis();
    let start = end - i64::from(lookback_days) * 86_400_000;
    (start, end)
}

/// Fetch a set of asset histories over one shared window, spacing requests
/// by [`REQUEST_SPACING`].
///
/// Under `FailFast` the first failure aborts the whole batch. Under
/// `SkipFailed` the batch always succeeds and each failure is returned as a
/// per-member `Err(reason)` for the caller to record.
pub async fn fetch_many_histories(
    client: &MarketClient,
    ids: &[String],
    interval: Interval,
    start_ms: i64,
    end_ms: i64,
    policy: FetchPolicy,
) -> Result<Vec<(String, Result<Vec<HistoryPoint>, String>)>> {
    let mut out = Vec::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(REQUEST_SPACING).await;
        }
        match fetch_history(client, id, interval, start_ms, end_ms).await {
            Ok(points) => out.push((id.clone(), Ok(points))),
            Err(e) => match policy {
                FetchPolicy::FailFast => return Err(e),
                FetchPolicy::SkipFailed => out.push((id.clone(), Err(format!("{e:#}")))),
            },
        }
    }
    Ok(out)
}

/// Fetch and parse one asset's history over an explicit window.
pub async fn fetch_history(
    client: &MarketClient,
    asset_id: &str,
    interval: Interval,
    start_ms: i64,
    end_ms: i64,
) -> Result<Vec<HistoryPoint>> {
    let records = client
        .asset_history(asset_id, interval, start_ms, end_ms)
        .await
        .with_context(|| format!("fetching history for {asset_id}"))?;
    let points = history::parse_history(&records)
        .with_context(|| format!("parsing history for {asset_id}"))?;
    Ok(points)
}
