use std::sync::Arc;

use log::debug;

use crate::assets::{Asset, AssetRepositoryTrait, AssetTypeSet};
use crate::errors::Result;
use crate::wallets::{Holding, HoldingsRepositoryTrait, HoldingsResolver, UserWallets};

/// Immutable reference data the portfolio services read from: the holdings
/// store, the asset catalog and the recognized asset types.
///
/// Cloning is cheap; repositories are shared behind `Arc`.
#[derive(Clone)]
pub struct PortfolioContext {
    resolver: HoldingsResolver,
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    asset_types: AssetTypeSet,
}

impl PortfolioContext {
    /// Builds a context using the asset types advertised by the catalog.
    pub fn new(
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        asset_repository: Arc<dyn AssetRepositoryTrait>,
    ) -> Result<Self> {
        let asset_types = asset_repository.asset_types()?;
        Ok(Self::with_asset_types(
            holdings_repository,
            asset_repository,
            asset_types,
        ))
    }

    pub fn with_asset_types(
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        asset_types: AssetTypeSet,
    ) -> Self {
        Self {
            resolver: HoldingsResolver::new(holdings_repository),
            asset_repository,
            asset_types,
        }
    }

    pub fn asset_types(&self) -> &AssetTypeSet {
        &self.asset_types
    }

    pub fn resolve_wallets(&self, user_id: &str) -> Result<UserWallets> {
        self.resolver.resolve(user_id)
    }

    /// Returns the holding's asset when it takes part in aggregation.
    ///
    /// Unknown asset ids and assets of unrecognized type yield `Ok(None)`;
    /// such holdings are skipped by every view.
    pub fn aggregatable_asset(&self, holding: &Holding) -> Result<Option<Asset>> {
        let Some(asset) = self.asset_repository.get_by_id(&holding.asset_id)? else {
            debug!("Skipping holding of unknown asset {}", holding.asset_id);
            return Ok(None);
        };
        if !self.asset_types.contains(&asset.asset_type) {
            debug!(
                "Skipping holding of {} with unrecognized type {}",
                asset.id, asset.asset_type
            );
            return Ok(None);
        }
        Ok(Some(asset))
    }
}
