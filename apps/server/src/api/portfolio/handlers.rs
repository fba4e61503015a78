use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use folio_core::{allocation::PortfolioChart, holdings::HoldingSummary};

use crate::{error::ApiResult, main_lib::AppState};

use super::dto::{require_user_id, ChartQuery, HoldingsQuery};

pub async fn get_portfolio_chart(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ChartQuery>,
) -> ApiResult<Json<PortfolioChart>> {
    let user_id = require_user_id(&q.user_id)?;
    let chart = state.allocation_service.get_portfolio_chart(user_id)?;
    tracing::debug!(
        "Chart for {}: total {} across {} types",
        user_id,
        chart.total_value,
        chart.chart.len()
    );
    Ok(Json(chart))
}

pub async fn get_portfolio_holdings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HoldingsQuery>,
) -> ApiResult<Json<Vec<HoldingSummary>>> {
    let user_id = require_user_id(&q.user_id)?;
    let holdings = state
        .holdings_service
        .get_holdings(user_id, q.asset_type.as_deref())?;
    Ok(Json(holdings))
}

pub async fn get_asset_types(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let types = state
        .holdings_service
        .asset_types()
        .iter()
        .map(|t| t.to_string())
        .collect();
    Json(types)
}
