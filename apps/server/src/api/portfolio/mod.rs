mod dto;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio-chart", get(handlers::get_portfolio_chart))
        .route("/portfolio-holdings", get(handlers::get_portfolio_holdings))
        .route("/asset-types", get(handlers::get_asset_types))
}
