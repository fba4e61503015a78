use super::decimal_utils::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use serde_with::serde_as;

#[test]
fn round_display_uses_bankers_rounding() {
    assert_eq!(round_display(dec!(2.345)), dec!(2.34));
    assert_eq!(round_display(dec!(2.355)), dec!(2.36));
    assert_eq!(round_display(dec!(33.3333333)), dec!(33.33));
    assert_eq!(round_display(dec!(66.6666666)), dec!(66.67));
}

#[test]
fn percentage_of_zero_total_is_zero() {
    assert_eq!(percentage_of(dec!(0), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percentage_of(dec!(15), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn percentage_of_whole_is_hundred() {
    assert_eq!(percentage_of(dec!(1000), dec!(1000)), dec!(100));
    assert_eq!(percentage_of(dec!(1), dec!(3)), dec!(33.33));
    assert_eq!(percentage_of(dec!(0), dec!(3)), dec!(0));
}

#[test]
fn checked_sum_reports_overflow() {
    assert_eq!(checked_sum(dec!(0.1), dec!(0.2)).unwrap(), dec!(0.3));
    assert!(matches!(
        checked_sum(Decimal::MAX, dec!(1)),
        Err(crate::errors::Error::Snapshot(crate::errors::SnapshotError::Invalid(_)))
    ));
}

#[serde_as]
#[derive(Serialize)]
struct Wrapper {
    #[serde_as(as = "DisplayDecimal")]
    value: Decimal,
}

#[test]
fn display_decimal_pads_to_two_places() {
    let json = serde_json::to_string(&Wrapper { value: dec!(1000) }).unwrap();
    assert_eq!(json, r#"{"value":1000.00}"#);

    let json = serde_json::to_string(&Wrapper { value: dec!(8.3) }).unwrap();
    assert_eq!(json, r#"{"value":8.30}"#);

    let json = serde_json::to_string(&Wrapper { value: dec!(0.1) + dec!(0.2) }).unwrap();
    assert_eq!(json, r#"{"value":0.30}"#);
}

#[serde_as]
#[derive(serde::Deserialize)]
struct Amount {
    #[serde_as(as = "ExactDecimal")]
    amount: Decimal,
}

#[test]
fn exact_decimal_reads_numbers_without_float_drift() {
    let parsed: Amount = serde_json::from_str(r#"{"amount":0.1}"#).unwrap();
    assert_eq!(parsed.amount, dec!(0.1));

    let parsed: Amount = serde_json::from_str(r#"{"amount":"1234.5678"}"#).unwrap();
    assert_eq!(parsed.amount, dec!(1234.5678));
}
