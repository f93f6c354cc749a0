pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod metrics;
pub mod model;
pub mod scrape;
pub mod summary;
