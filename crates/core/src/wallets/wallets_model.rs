use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A USD-denominated position in one asset, owned by a single wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub asset_id: String,
    pub amount: Decimal,
}

impl Holding {
    pub fn new(asset_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            asset_id: asset_id.into(),
            amount,
        }
    }
}

/// All wallets of one user, keyed by wallet key. Holdings are raw: asset ids
/// are not yet resolved against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWallets {
    pub user_id: String,
    pub wallets: BTreeMap<String, Vec<Holding>>,
}

impl UserWallets {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            wallets: BTreeMap::new(),
        }
    }

    /// Builder-style helper used by storage adapters and tests.
    pub fn with_wallet(mut self, wallet_key: impl Into<String>, holdings: Vec<Holding>) -> Self {
        self.wallets.insert(wallet_key.into(), holdings);
        self
    }

    /// Iterates every holding across every wallet, paired with its wallet key.
    pub fn holdings(&self) -> impl Iterator<Item = (&str, &Holding)> {
        self.wallets
            .iter()
            .flat_map(|(key, holdings)| holdings.iter().map(move |h| (key.as_str(), h)))
    }

    pub fn holding_count(&self) -> usize {
        self.wallets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.holding_count() == 0
    }
}
