use serde::Serialize;

/// Declarative chart description handed to the rendering layer. Pure data,
/// no layout engine on this side.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub traces: Vec<Trace>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_axis_title: Option<String>,
    /// Unified hover across traces at the same x.
    pub unified_hover: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub log_scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Axis {
            title: title.into(),
            log_scale: false,
            range: None,
            tick_format: None,
        }
    }
}

/// Which y axis a line is drawn against.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    /// Time-series line; x is epoch milliseconds, null y values are gaps.
    Line {
        name: String,
        x: Vec<i64>,
        y: Vec<Option<f64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hover_template: Option<String>,
        y_side: YSide,
    },
    /// Scatter of labeled points with size and color encodings.
    Markers {
        x: Vec<f64>,
        y: Vec<f64>,
        labels: Vec<String>,
        sizes: Vec<f64>,
        colors: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hover_template: Option<String>,
    },
    /// Labeled square heatmap; null cells stay null.
    Heatmap {
        x_labels: Vec<String>,
        y_labels: Vec<String>,
        z: Vec<Vec<Option<f64>>>,
        color_scale: String,
    },
}
