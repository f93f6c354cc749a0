use serde::{Deserialize, Serialize};

/// A hand-configured, named basket of asset ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetGroup {
    pub label: String,
    pub members: Vec<String>,
}

impl AssetGroup {
    pub fn new(label: impl Into<String>, members: &[&str]) -> Self {
        AssetGroup {
            label: label.into(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Default comparison baskets for the group-performance panel.
pub fn default_groups() -> Vec<AssetGroup> {
    vec![
        AssetGroup::new("Meme Coins", &["dogecoin", "shiba-inu"]),
        AssetGroup::new("DeFi", &["uniswap", "aave", "maker"]),
        AssetGroup::new("Layer 1", &["bitcoin", "ethereum", "solana"]),
        AssetGroup::new("Exchange Tokens", &["binance-coin", "ftx-token"]),
    ]
}
