use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Interval;

/// Bounds the momentum panel exposes to the user.
pub const LOOKBACK_DAYS_MIN: u32 = 7;
pub const LOOKBACK_DAYS_MAX: u32 = 30;
pub const MOMENTUM_WINDOW_MIN: usize = 6;
pub const MOMENTUM_WINDOW_MAX: usize = 72;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("panel `{panel}`: title must not be empty")]
    EmptyTitle { panel: &'static str },
    #[error("panel `{panel}`: limit must be at least 1")]
    ZeroLimit { panel: &'static str },
    #[error("panel `{panel}`: lookback of {days} days is outside 1..=30")]
    LookbackOutOfRange { panel: &'static str, days: u32 },
}

/// Per-panel knobs. Every recognized panel is an explicit field with typed
/// contents, validated once at load — never a string-keyed lookup at render
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub limit: u32,
    pub lookback_days: u32,
    pub interval: Interval,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            title: String::new(),
            limit: 10,
            lookback_days: 7,
            interval: Interval::H1,
        }
    }
}

impl PanelConfig {
    fn new(title: &str, limit: u32) -> Self {
        PanelConfig {
            title: title.to_string(),
            limit,
            ..PanelConfig::default()
        }
    }

    fn validate(&self, panel: &'static str) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle { panel });
        }
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit { panel });
        }
        if !(1..=LOOKBACK_DAYS_MAX).contains(&self.lookback_days) {
            return Err(ConfigError::LookbackOutOfRange {
                panel,
                days: self.lookback_days,
            });
        }
        Ok(())
    }
}

/// Titles for the summary tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub title: String,
    pub gainers_title: String,
    pub losers_title: String,
    pub volume_leaders_title: String,
    pub limit: u32,
    pub count: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            title: "Top 100 Coins (24h)".to_string(),
            gainers_title: "Gainers".to_string(),
            losers_title: "Losers".to_string(),
            volume_leaders_title: "Volume Leaders".to_string(),
            limit: 100,
            count: 3,
        }
    }
}

/// Full dashboard configuration, one field per panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    pub summary: SummaryConfig,
    pub performance: PanelConfig,
    pub risk_profile: PanelConfig,
    pub correlation: PanelConfig,
    pub group_performance: PanelConfig,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        PanelsConfig {
            summary: SummaryConfig::default(),
            performance: PanelConfig::new("Top Asset Performance", 5),
            risk_profile: PanelConfig::new("Asset Risk Profile", 20),
            correlation: PanelConfig::new("Price Correlation Matrix", 10),
            // Group membership is fixed by the configured baskets; the limit
            // field is unused for this panel.
            group_performance: PanelConfig::new("Asset Group Performance Comparison", 1),
        }
    }
}

impl PanelsConfig {
    /// Load from a JSON file; absent fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading panel config {}", path.display()))?;
        let config: PanelsConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing panel config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle { panel: "summary" });
        }
        if self.summary.limit == 0 {
            return Err(ConfigError::ZeroLimit { panel: "summary" });
        }
        self.performance.validate("performance")?;
        self.risk_profile.validate("risk_profile")?;
        self.correlation.validate("correlation")?;
        self.group_performance.validate("group_performance")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        PanelsConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_lookback() {
        let mut config = PanelsConfig::default();
        config.correlation.lookback_days = 45;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LookbackOutOfRange { panel: "correlation", days: 45 })
        ));
    }

    #[test]
    fn rejects_empty_title() {
        let mut config = PanelsConfig::default();
        config.performance.title = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTitle { panel: "performance" })
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PanelsConfig =
            serde_json::from_str(r#"{"risk_profile": {"title": "Risk", "lookback_days": 14}}"#)
                .unwrap();
        assert_eq!(config.risk_profile.title, "Risk");
        assert_eq!(config.risk_profile.lookback_days, 14);
        assert_eq!(config.performance.title, "Top Asset Performance");
        config.validate().unwrap();
    }
}
