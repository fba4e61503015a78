use std::sync::Arc;

use log::debug;

use crate::assets::AssetTypeSet;
use crate::errors::Result;
use crate::portfolio::PortfolioContext;
use crate::wallets::UserWallets;

use super::holdings_model::{HoldingSummary, HoldingsSelection};

pub trait HoldingsServiceTrait: Send + Sync {
    /// Exact selection of the user's holdings, optionally restricted to one
    /// asset type (case-sensitive match). An empty filter means no filter.
    fn select_holdings(&self, user_id: &str, asset_type: Option<&str>)
        -> Result<HoldingsSelection>;

    /// The holdings list: rounded values and percentages of the filtered total,
    /// largest first.
    fn get_holdings(&self, user_id: &str, asset_type: Option<&str>) -> Result<Vec<HoldingSummary>>;

    /// Asset types that take part in aggregation.
    fn asset_types(&self) -> &AssetTypeSet;
}

pub struct HoldingsService {
    context: Arc<PortfolioContext>,
}

impl HoldingsService {
    pub fn new(context: Arc<PortfolioContext>) -> Self {
        Self { context }
    }

    fn filter_holdings(
        &self,
        wallets: &UserWallets,
        asset_type: Option<&str>,
    ) -> Result<HoldingsSelection> {
        let mut selection = HoldingsSelection::default();
        for (wallet_key, holding) in wallets.holdings() {
            let Some(asset) = self.context.aggregatable_asset(holding)? else {
                continue;
            };
            if let Some(wanted) = asset_type {
                if asset.asset_type.as_str() != wanted {
                    continue;
                }
            }
            selection.push(wallet_key, asset, holding.amount)?;
        }
        Ok(selection)
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn select_holdings(
        &self,
        user_id: &str,
        asset_type: Option<&str>,
    ) -> Result<HoldingsSelection> {
        let wallets = self.context.resolve_wallets(user_id)?;
        let asset_type = asset_type.filter(|t| !t.is_empty());
        let selection = self.filter_holdings(&wallets, asset_type)?;
        debug!(
            "Selected {} of {} holdings for user {} (filter {:?}, total {})",
            selection.holdings.len(),
            wallets.holding_count(),
            wallets.user_id,
            asset_type,
            selection.filtered_total
        );
        Ok(selection)
    }

    fn get_holdings(&self, user_id: &str, asset_type: Option<&str>) -> Result<Vec<HoldingSummary>> {
        Ok(self.select_holdings(user_id, asset_type)?.into_summaries())
    }

    fn asset_types(&self) -> &AssetTypeSet {
        self.context.asset_types()
    }
}
