//! JSON snapshot storage implementation for Folio.
//!
//! This crate implements the read-only repository traits defined in
//! `folio-core` on top of a single JSON document holding the asset catalog,
//! the recognized asset types and every user's wallets:
//!
//! ```text
//!   portfolio.json ──► PortfolioSnapshot ──┬──► JsonAssetRepository
//!                     (validated on load)  └──► JsonHoldingsRepository
//!                                                      │
//!                                                      ▼
//!                                              PortfolioContext (core)
//! ```
//!
//! The snapshot is loaded once and never written back.

pub mod assets;
pub mod errors;
pub mod snapshot;
pub mod wallets;

use std::sync::Arc;

pub use assets::JsonAssetRepository;
pub use errors::StorageError;
pub use snapshot::{load_snapshot, parse_snapshot, sample_snapshot, AssetRecord, PortfolioSnapshot};
pub use wallets::JsonHoldingsRepository;

// Re-export from folio-core for convenience
pub use folio_core::errors::{Error, Result};
use folio_core::PortfolioContext;

/// Wires both repositories for `snapshot` into a portfolio context.
pub fn build_context(snapshot: &PortfolioSnapshot) -> Result<PortfolioContext> {
    let holdings = Arc::new(JsonHoldingsRepository::from_snapshot(snapshot));
    let assets = Arc::new(JsonAssetRepository::from_snapshot(snapshot));
    PortfolioContext::new(holdings, assets)
}
