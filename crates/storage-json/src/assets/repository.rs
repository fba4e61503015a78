use std::collections::HashMap;

use folio_core::assets::{Asset, AssetRepositoryTrait, AssetTypeSet};
use folio_core::Result;

use crate::snapshot::PortfolioSnapshot;

/// Asset catalog held in memory, built once from a snapshot.
pub struct JsonAssetRepository {
    assets: HashMap<String, Asset>,
    asset_types: AssetTypeSet,
}

impl JsonAssetRepository {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            assets: snapshot
                .to_assets()
                .into_iter()
                .map(|asset| (asset.id.clone(), asset))
                .collect(),
            asset_types: snapshot.asset_type_set(),
        }
    }
}

impl AssetRepositoryTrait for JsonAssetRepository {
    fn get_by_id(&self, asset_id: &str) -> Result<Option<Asset>> {
        Ok(self.assets.get(asset_id).cloned())
    }

    fn asset_types(&self) -> Result<AssetTypeSet> {
        Ok(self.asset_types.clone())
    }
}
