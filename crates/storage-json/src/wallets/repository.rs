use std::collections::HashMap;

use folio_core::wallets::{HoldingsRepositoryTrait, UserWallets};
use folio_core::Result;

use crate::snapshot::PortfolioSnapshot;

/// Per-user wallets held in memory, built once from a snapshot.
pub struct JsonHoldingsRepository {
    users: HashMap<String, UserWallets>,
}

impl JsonHoldingsRepository {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            users: snapshot
                .to_user_wallets()
                .into_iter()
                .map(|wallets| (wallets.user_id.clone(), wallets))
                .collect(),
        }
    }
}

impl HoldingsRepositoryTrait for JsonHoldingsRepository {
    fn get_user_wallets(&self, user_id: &str) -> Result<Option<UserWallets>> {
        Ok(self.users.get(user_id).cloned())
    }
}
