//! Holdings list: per-holding value and share of the (filtered) portfolio.

mod holdings_model;
mod holdings_service;


pub use holdings_model::{HoldingSummary, HoldingsSelection, SelectedHolding};
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
