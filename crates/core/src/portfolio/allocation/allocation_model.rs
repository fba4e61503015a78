//! Allocation models for the portfolio breakdown by asset type.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::assets::AssetType;
use crate::errors::Result;
use crate::utils::decimal_utils::{checked_sum, percentage_of, round_display, DisplayDecimal};

/// Exact, unrounded per-type sums for one user.
///
/// `total` always equals the sum of `subtotals`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTotals {
    pub total: Decimal,
    pub subtotals: BTreeMap<AssetType, Decimal>,
    /// Holdings left out because their asset is unknown or of unrecognized type
    pub skipped: usize,
}

impl TypeTotals {
    /// Adds a holding to its type bucket. Nothing changes when either sum
    /// would overflow.
    pub fn add(&mut self, asset_type: AssetType, amount: Decimal) -> Result<()> {
        let total = checked_sum(self.total, amount)?;
        let current = self.subtotals.get(&asset_type).copied().unwrap_or_default();
        let subtotal = checked_sum(current, amount)?;
        self.subtotals.insert(asset_type, subtotal);
        self.total = total;
        Ok(())
    }

    /// Rounds the totals into the presented chart.
    ///
    /// A zero total yields an empty chart. Percentages are rounded
    /// independently and may not add up to exactly 100.
    pub fn into_chart(self) -> PortfolioChart {
        if self.total.is_zero() {
            return PortfolioChart::default();
        }
        let total = self.total;
        let chart = self
            .subtotals
            .into_iter()
            .map(|(asset_type, subtotal)| (asset_type, percentage_of(subtotal, total)))
            .collect();
        PortfolioChart {
            total_value: round_display(total),
            chart,
        }
    }
}

/// Total portfolio value and percentage share per asset type.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioChart {
    #[serde_as(as = "DisplayDecimal")]
    pub total_value: Decimal,
    #[serde_as(as = "BTreeMap<_, DisplayDecimal>")]
    pub chart: BTreeMap<AssetType, Decimal>,
}
