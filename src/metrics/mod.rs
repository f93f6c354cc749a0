pub mod correlation;
pub mod fetch;
pub mod group_perf;
pub mod momentum;
pub mod movers;
pub mod performance;
pub mod risk;
pub mod volatility;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use fetch::{FetchPolicy, lookback_window_ms};
pub use group_perf::{GroupPerformance, MemberOutcome, group_performance};
pub use momentum::momentum;
pub use movers::{MoverRow, Movers, top_movers};
pub use performance::{PerformanceSeries, normalized_performance};
pub use risk::{RiskRow, risk_profile};
pub use volatility::volatility;

use thiserror::Error;

use crate::model::BadDecimal;

/// Computation-domain failure: an explicitly undefined statistic, distinct
/// from any valid zero.
#[derive(Debug, Error)]
pub enum MetricError {
    /// A series that needs a normalization base has no points.
    #[error("price series is empty")]
    EmptySeries,
    /// Too few points for the statistic to be defined.
    #[error("need at least {needed} history points, got {got}")]
    InsufficientHistory { needed: usize, got: usize },
    #[error(transparent)]
    BadDecimal(#[from] BadDecimal),
}
