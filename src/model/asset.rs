use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A numeric field arrived as a string the API promised to be decimal, but
/// it does not parse. Hard error for the record carrying it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("field `{field}` is not a decimal number: {value:?}")]
pub struct BadDecimal {
    pub field: &'static str,
    pub value: String,
}

/// Raw asset row as returned by the API. Every numeric field is a decimal
/// string; nullable fields are `Option`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub rank: Option<String>,
    pub symbol: String,
    pub name: String,
    pub supply: String,
    pub max_supply: Option<String>,
    pub market_cap_usd: String,
    pub volume_usd24_hr: String,
    pub price_usd: String,
    pub change_percent24_hr: String,
    pub vwap24_hr: Option<String>,
    pub explorer: Option<String>,
}

/// Parsed asset snapshot. Immutable per fetch; nothing persists across
/// fetches.
#[derive(Debug, Clone)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub change_percent_24h: f64,
    pub volume_usd_24h: f64,
    pub market_cap_usd: f64,
    pub supply: f64,
    pub max_supply: Option<f64>,
    pub vwap_24h: Option<f64>,
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, BadDecimal> {
    raw.trim().parse::<f64>().map_err(|_| BadDecimal {
        field,
        value: raw.to_string(),
    })
}

fn parse_optional(field: &'static str, raw: &Option<String>) -> Result<Option<f64>, BadDecimal> {
    raw.as_deref().map(|s| parse_decimal(field, s)).transpose()
}

impl TryFrom<AssetRecord> for Asset {
    type Error = BadDecimal;

    fn try_from(rec: AssetRecord) -> Result<Self, BadDecimal> {
        Ok(Asset {
            price_usd: parse_decimal("priceUsd", &rec.price_usd)?,
            change_percent_24h: parse_decimal("changePercent24Hr", &rec.change_percent24_hr)?,
            volume_usd_24h: parse_decimal("volumeUsd24Hr", &rec.volume_usd24_hr)?,
            market_cap_usd: parse_decimal("marketCapUsd", &rec.market_cap_usd)?,
            supply: parse_decimal("supply", &rec.supply)?,
            max_supply: parse_optional("maxSupply", &rec.max_supply)?,
            vwap_24h: parse_optional("vwap24Hr", &rec.vwap24_hr)?,
            id: rec.id,
            name: rec.name,
            symbol: rec.symbol,
        })
    }
}

/// Parse a whole listing; the first bad record aborts the batch.
pub fn parse_assets(records: Vec<AssetRecord>) -> Result<Vec<Asset>, BadDecimal> {
    records.into_iter().map(Asset::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(change: &str) -> AssetRecord {
        AssetRecord {
            id: "bitcoin".into(),
            rank: Some("1".into()),
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            supply: "19000000".into(),
            max_supply: Some("21000000".into()),
            market_cap_usd: "1200000000000.5".into(),
            volume_usd24_hr: "35000000000".into(),
            price_usd: "63000.12".into(),
            change_percent24_hr: change.into(),
            vwap24_hr: None,
            explorer: None,
        }
    }

    #[test]
    fn parses_decimal_strings() {
        let asset = Asset::try_from(record("5.25")).unwrap();
        assert_eq!(asset.change_percent_24h, 5.25);
        assert_eq!(asset.price_usd, 63000.12);
        assert_eq!(asset.max_supply, Some(21_000_000.0));
        assert_eq!(asset.vwap_24h, None);
    }

    #[test]
    fn bad_decimal_is_hard_error() {
        let err = Asset::try_from(record("n/a")).unwrap_err();
        assert_eq!(err.field, "changePercent24Hr");
        assert_eq!(err.value, "n/a");
    }

    #[test]
    fn record_deserializes_api_field_names() {
        let json = r#"{
            "id": "ethereum", "rank": "2", "symbol": "ETH", "name": "Ethereum",
            "supply": "120000000", "maxSupply": null,
            "marketCapUsd": "400000000000", "volumeUsd24Hr": "12000000000",
            "priceUsd": "3300.5", "changePercent24Hr": "-1.2",
            "vwap24Hr": "3280.1", "explorer": "https://etherscan.io/"
        }"#;
        let rec: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.change_percent24_hr, "-1.2");
        let asset = Asset::try_from(rec).unwrap();
        assert_eq!(asset.vwap_24h, Some(3280.1));
        assert_eq!(asset.max_supply, None);
    }
}
