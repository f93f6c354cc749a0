use serde::Serialize;

use crate::model::Asset;

/// One row of a ranked table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoverRow {
    pub name: String,
    pub symbol: String,
    pub value: f64,
}

/// The three summary-tile tables.
#[derive(Debug, Clone, Serialize)]
pub struct Movers {
    pub gainers: Vec<MoverRow>,
    pub losers: Vec<MoverRow>,
    pub volume_leaders: Vec<MoverRow>,
}

/// Rank assets by 24h change (both directions) and 24h volume, keeping the
/// top `n` of each. Ties keep input order (stable sort).
pub fn top_movers(assets: &[Asset], n: usize) -> Movers {
    Movers {
        gainers: ranked(assets, n, |a| a.change_percent_24h, true),
        losers: ranked(assets, n, |a| a.change_percent_24h, false),
        volume_leaders: ranked(assets, n, |a| a.volume_usd_24h, true),
    }
}

fn ranked(assets: &[Asset], n: usize, key: impl Fn(&Asset) -> f64, descending: bool) -> Vec<MoverRow> {
    let mut sorted: Vec<&Asset> = assets.iter().collect();
    sorted.sort_by(|a, b| {
        let ord = key(a).total_cmp(&key(b));
        if descending { ord.reverse() } else { ord }
    });
    sorted
        .into_iter()
        .take(n)
        .map(|a| MoverRow {
            name: a.name.clone(),
            symbol: a.symbol.clone(),
            value: key(a),
        })
        .collect()
}
