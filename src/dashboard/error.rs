use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::client::ClientError;
use crate::metrics::MetricError;
use crate::model::BadDecimal;

/// A failed panel. Rendered as a JSON error body for that panel only; the
/// page shows it inline and every other panel keeps working.
#[derive(Debug)]
pub enum PanelError {
    /// Rejected request parameters.
    BadRequest(String),
    /// The upstream market data API failed or answered garbage.
    Upstream(String),
    /// A statistic could not be computed from what the API returned.
    Computation(String),
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            PanelError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            PanelError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            PanelError::Computation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };
        (status, axum::Json(json!({ "error": msg }))).into_response()
    }
}

impl From<ClientError> for PanelError {
    fn from(err: ClientError) -> Self {
        PanelError::Upstream(err.to_string())
    }
}

impl From<MetricError> for PanelError {
    fn from(err: MetricError) -> Self {
        PanelError::Computation(err.to_string())
    }
}

impl From<BadDecimal> for PanelError {
    fn from(err: BadDecimal) -> Self {
        PanelError::Computation(err.to_string())
    }
}

impl From<anyhow::Error> for PanelError {
    fn from(err: anyhow::Error) -> Self {
        // Orchestrated fetch loops bubble up through anyhow; the chain keeps
        // the upstream detail.
        PanelError::Upstream(format!("{err:#}"))
    }
}
