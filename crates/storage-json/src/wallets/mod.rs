//! Snapshot-backed holdings store.

mod repository;

pub use repository::JsonHoldingsRepository;
