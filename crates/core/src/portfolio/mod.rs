//! Portfolio views computed from a user's wallets.

pub mod allocation;
pub mod holdings;
mod portfolio_context;

pub use portfolio_context::PortfolioContext;
