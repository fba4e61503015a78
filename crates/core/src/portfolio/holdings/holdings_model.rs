use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::assets::{Asset, AssetType};
use crate::errors::Result;
use crate::utils::decimal_utils::{checked_sum, percentage_of, round_display, DisplayDecimal};

/// One aggregatable holding that passed the type filter, with its exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedHolding {
    pub wallet_key: String,
    pub asset: Asset,
    pub value: Decimal,
}

/// Exact, unrounded result of filtering a user's holdings.
///
/// `filtered_total` always equals the sum of the selected values and is the
/// denominator for holding percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldingsSelection {
    pub holdings: Vec<SelectedHolding>,
    pub filtered_total: Decimal,
}

impl HoldingsSelection {
    pub fn push(&mut self, wallet_key: &str, asset: Asset, value: Decimal) -> Result<()> {
        self.filtered_total = checked_sum(self.filtered_total, value)?;
        self.holdings.push(SelectedHolding {
            wallet_key: wallet_key.to_string(),
            asset,
            value,
        });
        Ok(())
    }

    /// Rounds each holding for display and orders the rows.
    ///
    /// Rows are sorted by displayed value descending, then ticker ascending.
    /// Name, exact value, asset id and wallet key break any remaining ties.
    pub fn into_summaries(self) -> Vec<HoldingSummary> {
        let total = self.filtered_total;
        let mut rows: Vec<(SelectedHolding, HoldingSummary)> = self
            .holdings
            .into_iter()
            .map(|selected| {
                let summary = HoldingSummary {
                    ticker: selected.asset.ticker.clone(),
                    name: selected.asset.name.clone(),
                    asset_type: selected.asset.asset_type.clone(),
                    value: round_display(selected.value),
                    percentage: percentage_of(selected.value, total),
                };
                (selected, summary)
            })
            .collect();

        rows.sort_by(|(a_sel, a), (b_sel, b)| {
            b.value
                .cmp(&a.value)
                .then_with(|| a.ticker.cmp(&b.ticker))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| b_sel.value.cmp(&a_sel.value))
                .then_with(|| compare_origin(a_sel, b_sel))
        });

        rows.into_iter().map(|(_, summary)| summary).collect()
    }
}

fn compare_origin(a: &SelectedHolding, b: &SelectedHolding) -> Ordering {
    a.asset
        .id
        .cmp(&b.asset.id)
        .then_with(|| a.wallet_key.cmp(&b.wallet_key))
}

/// A row of the holdings list.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub ticker: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde_as(as = "DisplayDecimal")]
    pub value: Decimal,
    #[serde_as(as = "DisplayDecimal")]
    pub percentage: Decimal,
}
