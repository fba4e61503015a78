//! Wallets module - raw per-user holdings and the resolver that reads them.

mod holdings_resolver;
mod wallets_model;
mod wallets_traits;


pub use holdings_resolver::{validate_user_id, HoldingsResolver};
pub use wallets_model::{Holding, UserWallets};
pub use wallets_traits::HoldingsRepositoryTrait;
