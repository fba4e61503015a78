use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, MapPreventDuplicates};

use folio_core::constants::DEFAULT_ASSET_TYPES;
use folio_core::utils::decimal_utils::ExactDecimal;
use folio_core::wallets::{Holding, UserWallets};
use folio_core::{Asset, AssetTypeSet};

/// Asset catalog entry as stored in the snapshot (the id is the map key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub ticker: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// wallet key -> asset id -> amount
pub type WalletsRecord = BTreeMap<String, BTreeMap<String, Decimal>>;

/// The whole reference-data document.
///
/// Repeated keys at any map level are rejected rather than overwritten.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default = "default_asset_types")]
    pub asset_types: Vec<String>,
    #[serde(default)]
    #[serde_as(as = "MapPreventDuplicates<_, _>")]
    pub assets: BTreeMap<String, AssetRecord>,
    #[serde(default)]
    #[serde_as(
        as = "MapPreventDuplicates<_, MapPreventDuplicates<_, MapPreventDuplicates<_, ExactDecimal>>>"
    )]
    pub users: BTreeMap<String, WalletsRecord>,
}

fn default_asset_types() -> Vec<String> {
    DEFAULT_ASSET_TYPES.iter().map(|t| t.to_string()).collect()
}

impl PortfolioSnapshot {
    pub fn asset_type_set(&self) -> AssetTypeSet {
        AssetTypeSet::new(self.asset_types.iter().cloned())
    }

    pub fn to_assets(&self) -> Vec<Asset> {
        self.assets
            .iter()
            .map(|(id, record)| {
                Asset::new(
                    id.clone(),
                    record.ticker.clone(),
                    record.name.clone(),
                    record.asset_type.clone(),
                )
            })
            .collect()
    }

    pub fn to_user_wallets(&self) -> Vec<UserWallets> {
        self.users
            .iter()
            .map(|(user_id, wallets)| {
                wallets
                    .iter()
                    .fold(UserWallets::new(user_id.clone()), |acc, (key, holdings)| {
                        let holdings = holdings
                            .iter()
                            .map(|(asset_id, amount)| Holding::new(asset_id.clone(), *amount))
                            .collect();
                        acc.with_wallet(key.clone(), holdings)
                    })
            })
            .collect()
    }
}
