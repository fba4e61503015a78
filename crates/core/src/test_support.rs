//! In-memory repositories shared by the unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::assets::{Asset, AssetRepositoryTrait, AssetTypeSet};
use crate::errors::{Error, Result};
use crate::portfolio::PortfolioContext;
use crate::wallets::{Holding, HoldingsRepositoryTrait, UserWallets};

#[derive(Default)]
pub struct MockHoldingsRepository {
    users: HashMap<String, UserWallets>,
    fail: bool,
}

impl MockHoldingsRepository {
    pub fn new(users: Vec<UserWallets>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.user_id.clone(), u)).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            users: HashMap::new(),
            fail: true,
        }
    }
}

impl HoldingsRepositoryTrait for MockHoldingsRepository {
    fn get_user_wallets(&self, user_id: &str) -> Result<Option<UserWallets>> {
        if self.fail {
            return Err(Error::Repository("holdings store unavailable".to_string()));
        }
        Ok(self.users.get(user_id).cloned())
    }
}

pub struct MockAssetRepository {
    assets: Vec<Asset>,
    types: AssetTypeSet,
}

impl MockAssetRepository {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            types: AssetTypeSet::default(),
        }
    }
}

impl AssetRepositoryTrait for MockAssetRepository {
    fn get_by_id(&self, asset_id: &str) -> Result<Option<Asset>> {
        Ok(self.assets.iter().find(|a| a.id == asset_id).cloned())
    }

    fn asset_types(&self) -> Result<AssetTypeSet> {
        Ok(self.types.clone())
    }
}

pub fn catalog() -> Vec<Asset> {
    vec![
        Asset::new("AAPL", "AAPL", "Apple", "stock"),
        Asset::new("MSFT", "MSFT", "Microsoft", "stock"),
        Asset::new("BOND1", "BOND1", "US Treasury 10Y", "bonds"),
        Asset::new("BTC", "BTC", "Bitcoin", "crypto"),
        Asset::new("GOLD", "GOLD", "Gold Bullion", "commodity"),
    ]
}

pub fn holding(asset_id: &str, amount: Decimal) -> Holding {
    Holding::new(asset_id, amount)
}

pub fn context(users: Vec<UserWallets>) -> PortfolioContext {
    PortfolioContext::new(
        Arc::new(MockHoldingsRepository::new(users)),
        Arc::new(MockAssetRepository::new(catalog())),
    )
    .expect("mock catalog exposes asset types")
}
