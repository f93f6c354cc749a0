pub mod error;
pub mod handlers;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::client::MarketClient;
use crate::config::PanelsConfig;
use crate::model::group;

use state::AppState;

/// Run the `serve` command: build state, mount panel routes, serve.
pub fn run(base_url: &str, host: &str, port: u16, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => PanelsConfig::load(path)?,
        None => PanelsConfig::default(),
    };
    let client = MarketClient::new(base_url).context("creating market data client")?;
    let state = AppState::new(client, config, group::default_groups());

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    rt.block_on(serve(host, port, state))
}

pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    let addr = format!("{host}:{port}");
    println!("coinscope dashboard listening on {addr}");
    println!("  Dashboard:   GET http://{addr}/");
    println!("  Summary:     GET http://{addr}/api/summary");
    println!("  Panels:      GET http://{addr}/api/panels/{{performance,risk,correlation,groups}}");
    println!("  Momentum:    GET http://{addr}/api/panels/momentum?asset=bitcoin&lookback_days=21&window=24");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    axum::serve(listener, app).await.context("running server")?;
    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "ok" }))
        .route("/api/summary", get(handlers::summary))
        .route("/api/panels/performance", get(handlers::performance))
        .route("/api/panels/risk", get(handlers::risk))
        .route("/api/panels/correlation", get(handlers::correlation))
        .route("/api/panels/groups", get(handlers::groups))
        .route("/api/panels/momentum", get(handlers::momentum))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
