use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::charts::{self, ChartSpec};
use crate::config::{
    LOOKBACK_DAYS_MAX, LOOKBACK_DAYS_MIN, MOMENTUM_WINDOW_MAX, MOMENTUM_WINDOW_MIN,
};
use crate::metrics::{
    self, MoverRow, PerformanceSeries, fetch, normalized_performance, top_movers,
};
use crate::model::{Asset, Interval, asset};

use super::error::PanelError;
use super::state::AppState;

/// Summary tiles: the three ranked tables plus their configured titles.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub title: String,
    pub gainers_title: String,
    pub losers_title: String,
    pub volume_leaders_title: String,
    pub gainers: Vec<MoverRow>,
    pub losers: Vec<MoverRow>,
    pub volume_leaders: Vec<MoverRow>,
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, PanelError> {
    let cfg = &state.config.summary;
    let assets = fetch_assets(&state, cfg.limit).await?;
    let movers = top_movers(&assets, cfg.count);

    Ok(Json(SummaryResponse {
        title: cfg.title.clone(),
        gainers_title: cfg.gainers_title.clone(),
        losers_title: cfg.losers_title.clone(),
        volume_leaders_title: cfg.volume_leaders_title.clone(),
        gainers: movers.gainers,
        losers: movers.losers,
        volume_leaders: movers.volume_leaders,
    }))
}

pub async fn performance(State(state): State<AppState>) -> Result<Json<ChartSpec>, PanelError> {
    let cfg = &state.config.performance;
    let assets = fetch_assets(&state, cfg.limit).await?;
    let (start_ms, end_ms) = fetch::lookback_window_ms(cfg.lookback_days);

    let mut series = Vec::with_capacity(assets.len());
    for (i, asset) in assets.iter().enumerate() {
        if i > 0 {
            sleep(fetch::REQUEST_SPACING).await;
        }
        let points =
            fetch::fetch_history(&state.client, &asset.id, cfg.interval, start_ms, end_ms).await?;
        let values = normalized_performance(&points)?;
        series.push(PerformanceSeries {
            name: asset.name.clone(),
            times_ms: points.iter().map(|p| p.time_ms).collect(),
            values,
        });
    }

    Ok(Json(charts::performance_lines(&cfg.title, &series)))
}

pub async fn risk(State(state): State<AppState>) -> Result<Json<ChartSpec>, PanelError> {
    let cfg = &state.config.risk_profile;
    let assets = fetch_assets(&state, cfg.limit).await?;
    let rows =
        metrics::risk_profile(&state.client, &assets, cfg.lookback_days, cfg.interval).await?;
    Ok(Json(charts::risk_scatter(&cfg.title, &rows)))
}

pub async fn correlation(State(state): State<AppState>) -> Result<Json<ChartSpec>, PanelError> {
    let cfg = &state.config.correlation;
    let assets = fetch_assets(&state, cfg.limit).await?;
    let (start_ms, end_ms) = fetch::lookback_window_ms(cfg.lookback_days);

    let mut series: Vec<(String, Vec<f64>)> = Vec::with_capacity(assets.len());
    for (i, asset) in assets.iter().enumerate() {
        if i > 0 {
            sleep(fetch::REQUEST_SPACING).await;
        }
        let points =
            fetch::fetch_history(&state.client, &asset.id, cfg.interval, start_ms, end_ms).await?;
        series.push((
            asset.name.clone(),
            points.iter().map(|p| p.price_usd).collect(),
        ));
    }

    let matrix = metrics::correlation_matrix(&series)?;
    Ok(Json(charts::correlation_heatmap(&cfg.title, &matrix)))
}

pub async fn groups(State(state): State<AppState>) -> Result<Json<ChartSpec>, PanelError> {
    let cfg = &state.config.group_performance;
    let groups =
        metrics::group_performance(&state.client, &state.groups, cfg.lookback_days, cfg.interval)
            .await?;
    Ok(Json(charts::group_lines(&cfg.title, &groups)))
}

#[derive(Debug, Deserialize)]
pub struct MomentumQuery {
    #[serde(default = "default_asset")]
    pub asset: String,
    #[serde(default = "default_lookback")]
    pub lookback_days: u32,
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_asset() -> String {
    "bitcoin".to_string()
}
fn default_lookback() -> u32 {
    21
}
fn default_window() -> usize {
    24
}

pub async fn momentum(
    State(state): State<AppState>,
    Query(query): Query<MomentumQuery>,
) -> Result<Json<ChartSpec>, PanelError> {
    if !(LOOKBACK_DAYS_MIN..=LOOKBACK_DAYS_MAX).contains(&query.lookback_days) {
        return Err(PanelError::BadRequest(format!(
            "lookback_days must be within {LOOKBACK_DAYS_MIN}..={LOOKBACK_DAYS_MAX}, got {}",
            query.lookback_days
        )));
    }
    if !(MOMENTUM_WINDOW_MIN..=MOMENTUM_WINDOW_MAX).contains(&query.window) {
        return Err(PanelError::BadRequest(format!(
            "window must be within {MOMENTUM_WINDOW_MIN}..={MOMENTUM_WINDOW_MAX} hours, got {}",
            query.window
        )));
    }

    let (start_ms, end_ms) = fetch::lookback_window_ms(query.lookback_days);
    let points =
        fetch::fetch_history(&state.client, &query.asset, Interval::H1, start_ms, end_ms).await?;

    let prices: Vec<f64> = points.iter().map(|p| p.price_usd).collect();
    let oscillator = metrics::momentum(&prices, query.window);

    let title = format!("{} Price and Momentum Analysis", query.asset);
    Ok(Json(charts::momentum_chart(&title, &points, &oscillator)))
}

async fn fetch_assets(state: &AppState, limit: u32) -> Result<Vec<Asset>, PanelError> {
    let records = state.client.assets(limit).await?;
    Ok(asset::parse_assets(records)?)
}
