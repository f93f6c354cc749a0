use crate::model::HistoryPoint;

use super::MetricError;

/// A named, normalized price series ready for charting.
#[derive(Debug, Clone)]
pub struct PerformanceSeries {
    pub name: String,
    pub times_ms: Vec<i64>,
    pub values: Vec<f64>,
}

/// Percentage change of every point relative to the first point. The first
/// output is exactly 0. Empty input has no normalization base.
pub fn normalized_performance(points: &[HistoryPoint]) -> Result<Vec<f64>, MetricError> {
    let base = points.first().ok_or(MetricError::EmptySeries)?.price_usd;
    Ok(points
        .iter()
        .map(|p| (p.price_usd - base) / base * 100.0)
        .collect())
}
