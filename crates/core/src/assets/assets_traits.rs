use super::assets_model::{Asset, AssetTypeSet};
use crate::errors::Result;

/// Read-only access to the asset catalog.
pub trait AssetRepositoryTrait: Send + Sync {
    /// Looks up an asset by id. A missing asset is `Ok(None)`, not an error.
    fn get_by_id(&self, asset_id: &str) -> Result<Option<Asset>>;

    /// The recognized asset types shipped with this catalog.
    fn asset_types(&self) -> Result<AssetTypeSet>;
}
