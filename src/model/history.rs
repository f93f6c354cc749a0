use serde::{Deserialize, Serialize};

use super::asset::BadDecimal;

/// Raw history bucket from `/assets/{id}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Epoch milliseconds.
    pub time: i64,
    #[serde(rename = "priceUsd")]
    pub price_usd: String,
    /// Human-readable timestamp the API echoes back; unused in computation.
    pub date: Option<String>,
}

/// Parsed history point. Sequences are ascending by time; the API gives no
/// gap-filling guarantee, a missing bucket just shortens the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    pub time_ms: i64,
    pub price_usd: f64,
}

impl TryFrom<&HistoryRecord> for HistoryPoint {
    type Error = BadDecimal;

    fn try_from(rec: &HistoryRecord) -> Result<Self, BadDecimal> {
        let price_usd = rec.price_usd.trim().parse::<f64>().map_err(|_| BadDecimal {
            field: "priceUsd",
            value: rec.price_usd.clone(),
        })?;
        Ok(HistoryPoint {
            time_ms: rec.time,
            price_usd,
        })
    }
}

/// Parse a fetched series; the first bad record aborts the series.
pub fn parse_history(records: &[HistoryRecord]) -> Result<Vec<HistoryPoint>, BadDecimal> {
    records.iter().map(HistoryPoint::try_from).collect()
}
