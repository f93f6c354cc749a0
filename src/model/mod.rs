pub mod asset;
pub mod group;
pub mod history;
pub mod interval;

pub use asset::{Asset, AssetRecord, BadDecimal};
pub use group::AssetGroup;
pub use history::{HistoryPoint, HistoryRecord};
pub use interval::Interval;
