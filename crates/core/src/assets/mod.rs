//! Assets module - reference data models and the catalog trait.

mod assets_model;
mod assets_traits;


// Re-export the public interface
pub use assets_model::{Asset, AssetType, AssetTypeSet};
pub use assets_traits::AssetRepositoryTrait;
