//! One builder per dashboard panel. Stateless mappings from computed
//! metrics to chart descriptions; all numbers arrive already computed.

use crate::metrics::{CorrelationMatrix, GroupPerformance, PerformanceSeries, RiskRow};
use crate::model::HistoryPoint;

use super::spec::{Axis, ChartSpec, Trace, YSide};

const CHANGE_HOVER: &str = "<b>%{x}</b><br>Change: %{y:.2f}%<extra></extra>";

/// Log-scale market cap vs. volatility, sized by volume, colored by 24h
/// change.
pub fn risk_scatter(title: &str, rows: &[RiskRow]) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        traces: vec![Trace::Markers {
            x: rows.iter().map(|r| r.market_cap_usd).collect(),
            y: rows.iter().map(|r| r.volatility_pct).collect(),
            labels: rows.iter().map(|r| r.name.clone()).collect(),
            sizes: rows.iter().map(|r| r.volume_usd_24h).collect(),
            colors: rows.iter().map(|r| r.change_percent_24h).collect(),
            hover_template: Some(
                "<b>%{text}</b><br>Volatility: %{y:.2f}%<extra></extra>".to_string(),
            ),
        }],
        x_axis: Axis {
            title: "Market Cap (USD, log scale)".to_string(),
            log_scale: true,
            range: None,
            tick_format: None,
        },
        y_axis: Axis::titled("Volatility (%)"),
        y_axis2: None,
        color_axis_title: Some("24h Change (%)".to_string()),
        unified_hover: false,
    }
}

/// Multi-line normalized performance.
pub fn performance_lines(title: &str, series: &[PerformanceSeries]) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        traces: series
            .iter()
            .map(|s| Trace::Line {
                name: s.name.clone(),
                x: s.times_ms.clone(),
                y: s.values.iter().map(|&v| Some(v)).collect(),
                hover_template: Some(CHANGE_HOVER.to_string()),
                y_side: YSide::Left,
            })
            .collect(),
        x_axis: Axis::titled("Date"),
        y_axis: Axis::titled("Price Change (%)"),
        y_axis2: None,
        color_axis_title: None,
        unified_hover: true,
    }
}

/// Symmetric correlation heatmap; undefined coefficients stay null cells.
pub fn correlation_heatmap(title: &str, matrix: &CorrelationMatrix) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        traces: vec![Trace::Heatmap {
            x_labels: matrix.labels.clone(),
            y_labels: matrix.labels.clone(),
            z: matrix.cells.clone(),
            color_scale: "RdBu".to_string(),
        }],
        x_axis: Axis::titled(""),
        y_axis: Axis::titled(""),
        y_axis2: None,
        color_axis_title: None,
        unified_hover: false,
    }
}

/// Averaged group performance lines. Groups where every member was skipped
/// have nothing to draw and are omitted.
pub fn group_lines(title: &str, groups: &[GroupPerformance]) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        traces: groups
            .iter()
            .filter(|g| !g.average.is_empty())
            .map(|g| Trace::Line {
                name: g.label.clone(),
                x: g.times_ms.clone(),
                y: g.average.iter().map(|&v| Some(v)).collect(),
                hover_template: Some(CHANGE_HOVER.to_string()),
                y_side: YSide::Left,
            })
            .collect(),
        x_axis: Axis::titled("Date"),
        y_axis: Axis::titled("Average Price Change (%)"),
        y_axis2: None,
        color_axis_title: None,
        unified_hover: true,
    }
}

/// Dual-axis price + momentum line chart; the oscillator axis is pinned to
/// [0, 100].
pub fn momentum_chart(
    title: &str,
    points: &[HistoryPoint],
    momentum: &[Option<f64>],
) -> ChartSpec {
    let times: Vec<i64> = points.iter().map(|p| p.time_ms).collect();
    ChartSpec {
        title: title.to_string(),
        traces: vec![
            Trace::Line {
                name: "Price".to_string(),
                x: times.clone(),
                y: points.iter().map(|p| Some(p.price_usd)).collect(),
                hover_template: None,
                y_side: YSide::Left,
            },
            Trace::Line {
                name: "Momentum".to_string(),
                x: times,
                y: momentum.to_vec(),
                hover_template: None,
                y_side: YSide::Right,
            },
        ],
        x_axis: Axis::titled("Date"),
        y_axis: Axis {
            title: "Price (USD)".to_string(),
            log_scale: false,
            range: None,
            tick_format: Some("$,.2f".to_string()),
        },
        y_axis2: Some(Axis {
            title: "Momentum".to_string(),
            log_scale: false,
            range: Some([0.0, 100.0]),
            tick_format: None,
        }),
        color_axis_title: None,
        unified_hover: true,
    }
}
