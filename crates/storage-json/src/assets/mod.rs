//! Snapshot-backed asset catalog.

mod repository;

pub use repository::JsonAssetRepository;
