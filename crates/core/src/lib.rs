//! Folio Core - Domain entities, services, and traits.
//!
//! This crate holds the portfolio aggregation engine. It is storage-agnostic:
//! holdings and asset reference data are read through the traits in
//! [`wallets`] and [`assets`], which are implemented by the `storage-json`
//! crate (or by in-memory mocks in tests).

pub mod assets;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;
pub mod wallets;

#[cfg(test)]
mod test_support;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
