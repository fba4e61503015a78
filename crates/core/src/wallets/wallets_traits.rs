use super::wallets_model::UserWallets;
use crate::errors::Result;

/// Read-only access to the per-user holdings store.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Returns the user's wallets, or `Ok(None)` when the user id is unknown.
    /// A known user without wallets is `Some` with an empty wallet map.
    fn get_user_wallets(&self, user_id: &str) -> Result<Option<UserWallets>>;
}
