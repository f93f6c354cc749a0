pub mod build;
pub mod spec;

pub use build::{
    correlation_heatmap, group_lines, momentum_chart, performance_lines, risk_scatter,
};
pub use spec::{Axis, ChartSpec, Trace, YSide};
