//! Service for computing the portfolio breakdown by asset type.

use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::portfolio::PortfolioContext;
use crate::wallets::UserWallets;

use super::{PortfolioChart, TypeTotals};

/// Trait for allocation service.
pub trait AllocationServiceTrait: Send + Sync {
    /// Exact per-type sums across all of the user's wallets.
    fn get_type_totals(&self, user_id: &str) -> Result<TypeTotals>;

    /// Total value and percentage per asset type, rounded for display.
    fn get_portfolio_chart(&self, user_id: &str) -> Result<PortfolioChart>;
}

/// Service for computing type-based portfolio allocations.
pub struct AllocationService {
    context: Arc<PortfolioContext>,
}

impl AllocationService {
    pub fn new(context: Arc<PortfolioContext>) -> Self {
        Self { context }
    }

    /// Sums every aggregatable holding into its type bucket.
    fn aggregate_by_type(&self, wallets: &UserWallets) -> Result<TypeTotals> {
        let mut totals = TypeTotals::default();
        for (_, holding) in wallets.holdings() {
            match self.context.aggregatable_asset(holding)? {
                Some(asset) => totals.add(asset.asset_type, holding.amount)?,
                None => totals.skipped += 1,
            }
        }
        Ok(totals)
    }
}

impl AllocationServiceTrait for AllocationService {
    fn get_type_totals(&self, user_id: &str) -> Result<TypeTotals> {
        let wallets = self.context.resolve_wallets(user_id)?;
        let totals = self.aggregate_by_type(&wallets)?;
        debug!(
            "Aggregated {} types for user {} (total {}, skipped {})",
            totals.subtotals.len(),
            wallets.user_id,
            totals.total,
            totals.skipped
        );
        Ok(totals)
    }

    fn get_portfolio_chart(&self, user_id: &str) -> Result<PortfolioChart> {
        Ok(self.get_type_totals(user_id)?.into_chart())
    }
}
