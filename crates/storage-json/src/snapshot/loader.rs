use std::path::Path;

use log::{info, warn};
use rust_decimal::Decimal;

use folio_core::errors::{Result, SnapshotError};
use folio_core::utils::decimal_utils::checked_sum;

use super::model::PortfolioSnapshot;
use crate::errors::StorageError;

const SAMPLE_SNAPSHOT: &str = include_str!("../../data/sample_portfolio.json");

/// Reads and validates a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<PortfolioSnapshot> {
    let raw = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let snapshot = parse_snapshot(&raw)?;
    info!(
        "Loaded snapshot {} ({} assets, {} users)",
        path.display(),
        snapshot.assets.len(),
        snapshot.users.len()
    );
    Ok(snapshot)
}

/// Parses and validates a snapshot document.
pub fn parse_snapshot(raw: &str) -> Result<PortfolioSnapshot> {
    let snapshot: PortfolioSnapshot = serde_json::from_str(raw).map_err(StorageError::from)?;
    validate(&snapshot)?;
    Ok(snapshot)
}

/// The snapshot bundled with the crate, used when no data file is configured.
pub fn sample_snapshot() -> Result<PortfolioSnapshot> {
    parse_snapshot(SAMPLE_SNAPSHOT)
}

fn validate(snapshot: &PortfolioSnapshot) -> Result<()> {
    if snapshot.asset_types.iter().any(|t| t.trim().is_empty()) {
        return Err(SnapshotError::Invalid("asset_types contains an empty tag".to_string()).into());
    }

    let recognized = snapshot.asset_type_set();
    for (id, record) in &snapshot.assets {
        if id.trim().is_empty() {
            return Err(SnapshotError::Invalid("asset with empty id".to_string()).into());
        }
        if record.ticker.trim().is_empty() {
            return Err(SnapshotError::Invalid(format!("asset {} has an empty ticker", id)).into());
        }
        if !recognized.contains(&record.asset_type.as_str().into()) {
            warn!(
                "Asset {} has unrecognized type '{}' and will be excluded from aggregation",
                id, record.asset_type
            );
        }
    }

    for (user_id, wallets) in &snapshot.users {
        if user_id.trim().is_empty() {
            return Err(SnapshotError::Invalid("user with empty id".to_string()).into());
        }
        let mut user_total = Decimal::ZERO;
        for (wallet, holdings) in wallets {
            for (asset_id, amount) in holdings {
                if *amount < Decimal::ZERO {
                    return Err(SnapshotError::NegativeAmount {
                        user_id: user_id.clone(),
                        wallet: wallet.clone(),
                        asset_id: asset_id.clone(),
                        amount: amount.to_string(),
                    }
                    .into());
                }
                user_total = checked_sum(user_total, *amount).map_err(|_| {
                    SnapshotError::Invalid(format!(
                        "holdings of user {} exceed the representable total",
                        user_id
                    ))
                })?;
                if !snapshot.assets.contains_key(asset_id) {
                    warn!(
                        "Holding {} in wallet {} of user {} has no catalog entry and will be ignored",
                        asset_id, wallet, user_id
                    );
                }
            }
        }
    }
    Ok(())
}
