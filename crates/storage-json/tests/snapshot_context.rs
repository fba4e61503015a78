use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::tempdir;

use folio_core::allocation::{AllocationService, AllocationServiceTrait};
use folio_core::errors::{Error, SnapshotError};
use folio_core::holdings::{HoldingsService, HoldingsServiceTrait};
use folio_core::AssetType;
use folio_storage_json::{build_context, load_snapshot, sample_snapshot};

#[test]
fn loads_snapshot_from_disk_and_aggregates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(
        &path,
        r#"{
            "asset_types": ["stock", "bonds"],
            "assets": {
                "AAPL": { "ticker": "AAPL", "name": "Apple", "type": "stock" },
                "BOND1": { "ticker": "BOND1", "name": "US Treasury 10Y", "type": "bonds" }
            },
            "users": { "u1": { "main": { "AAPL": 1000, "BOND1": 1000 } } }
        }"#,
    )
    .unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    let context = Arc::new(build_context(&snapshot).unwrap());

    let chart = AllocationService::new(context.clone())
        .get_portfolio_chart("u1")
        .unwrap();
    assert_eq!(chart.total_value, dec!(2000));
    assert_eq!(chart.chart[&AssetType::new("stock")], dec!(50));
    assert_eq!(chart.chart[&AssetType::new("bonds")], dec!(50));

    let bonds = HoldingsService::new(context)
        .get_holdings("u1", Some("bonds"))
        .unwrap();
    assert_eq!(bonds.len(), 1);
    assert_eq!(bonds[0].ticker, "BOND1");
    assert_eq!(bonds[0].percentage, dec!(100));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Snapshot(SnapshotError::Io { .. })));
}

#[test]
fn sample_portfolio_breakdown() {
    let context = Arc::new(build_context(&sample_snapshot().unwrap()).unwrap());
    let chart = AllocationService::new(context)
        .get_portfolio_chart("user_1")
        .unwrap();

    assert_eq!(chart.total_value, dec!(40000));
    assert_eq!(chart.chart[&AssetType::new("stock")], dec!(30));
    assert_eq!(chart.chart[&AssetType::new("bonds")], dec!(15));
    assert_eq!(chart.chart[&AssetType::new("crypto")], dec!(20));
    assert_eq!(chart.chart[&AssetType::new("nft")], dec!(20));
    assert_eq!(chart.chart[&AssetType::new("defi")], dec!(6.25));
    assert_eq!(chart.chart[&AssetType::new("real_estate")], dec!(8.75));
}

#[test]
fn sample_portfolio_skips_unrecognized_and_unknown_assets() {
    let context = Arc::new(build_context(&sample_snapshot().unwrap()).unwrap());
    let rows = HoldingsService::new(context)
        .get_holdings("user_3", None)
        .unwrap();

    let tickers: Vec<&str> = rows.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["GOOGL", "BOND2"]);
    assert_eq!(rows[0].value, dec!(1200.25));
    assert_eq!(rows[0].percentage, dec!(60.00));
    assert_eq!(rows[1].percentage, dec!(40.00));
}
