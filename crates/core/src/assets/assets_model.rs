use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ASSET_TYPES;

/// Category tag used to bucket assets in the portfolio chart (`stock`, `bonds`, ...).
///
/// Tags compare case-sensitively; `Stock` and `stock` are different types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetType(String);

impl AssetType {
    pub fn new(tag: impl Into<String>) -> Self {
        AssetType(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetType {
    fn from(tag: &str) -> Self {
        AssetType::new(tag)
    }
}

impl From<String> for AssetType {
    fn from(tag: String) -> Self {
        AssetType(tag)
    }
}

impl PartialEq<str> for AssetType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// The fixed set of asset types that take part in aggregation.
///
/// Holdings whose asset carries a type outside this set are left out of
/// totals, breakdowns and holdings lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetTypeSet(BTreeSet<AssetType>);

impl AssetTypeSet {
    pub fn new<I, T>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AssetType>,
    {
        AssetTypeSet(types.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, asset_type: &AssetType) -> bool {
        self.0.contains(asset_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AssetTypeSet {
    fn default() -> Self {
        AssetTypeSet::new(DEFAULT_ASSET_TYPES)
    }
}

/// Canonical metadata for a tradable instrument, keyed by asset id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    /// Short symbol shown to the user (AAPL, BTC)
    pub ticker: String,
    /// Display name (Apple, Bitcoin)
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        ticker: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<AssetType>,
    ) -> Self {
        Self {
            id: id.into(),
            ticker: ticker.into(),
            name: name.into(),
            asset_type: asset_type.into(),
        }
    }
}
