//! Snapshot document model and loader.

mod loader;
mod model;


pub use loader::{load_snapshot, parse_snapshot, sample_snapshot};
pub use model::{AssetRecord, PortfolioSnapshot, WalletsRecord};
