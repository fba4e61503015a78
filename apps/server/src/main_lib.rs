use std::sync::Arc;

use folio_core::allocation::{AllocationService, AllocationServiceTrait};
use folio_core::holdings::{HoldingsService, HoldingsServiceTrait};
use folio_storage_json::{build_context, load_snapshot, sample_snapshot, PortfolioSnapshot};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub allocation_service: Arc<dyn AllocationServiceTrait + Send + Sync>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let snapshot = match &config.data_path {
        Some(path) => {
            tracing::info!("Loading portfolio snapshot from {}", path.display());
            load_snapshot(path)?
        }
        None => {
            tracing::warn!("FOLIO_DATA_PATH not set; serving the bundled sample snapshot");
            sample_snapshot()?
        }
    };
    state_from_snapshot(&snapshot)
}

pub fn state_from_snapshot(snapshot: &PortfolioSnapshot) -> anyhow::Result<Arc<AppState>> {
    let context = Arc::new(build_context(snapshot)?);
    tracing::info!(
        "Portfolio context ready: {} users, {} assets, {} recognized types",
        snapshot.users.len(),
        snapshot.assets.len(),
        context.asset_types().len()
    );

    let allocation_service = Arc::new(AllocationService::new(context.clone()));
    let holdings_service = Arc::new(HoldingsService::new(context));

    Ok(Arc::new(AppState {
        allocation_service,
        holdings_service,
    }))
}
