//! Fixed-point helpers shared by the chart and holdings-list paths.
//!
//! Every presented figure goes through [`round_display`] exactly once, so
//! both views agree on the rounding rule.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, SnapshotError};

/// Banker's rounding: midpoints go to the even neighbour (2.345 -> 2.34, 2.355 -> 2.36).
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Rounds a value to display precision.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, DISPLAY_ROUNDING)
}

/// Returns `part` as a rounded percentage of `total`, or zero when `total` is zero.
///
/// Callers guarantee `0 <= part <= total`, which keeps the result in `[0, 100]`.
pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    round_display(part / total * dec!(100))
}

/// Adds two exact amounts, failing when the sum leaves the representable range.
pub fn checked_sum(sum: Decimal, amount: Decimal) -> Result<Decimal> {
    sum.checked_add(amount).ok_or_else(|| {
        SnapshotError::Invalid(format!("sum of holdings overflows: {} + {}", sum, amount)).into()
    })
}

/// Serde adapter that writes a decimal as a JSON number with at least two
/// fractional digits (`1000` -> `1000.00`).
///
/// The number is emitted from the decimal's string form, so no binary
/// floating point is involved. Values are expected to be rounded already;
/// the adapter only pads the scale.
pub struct DisplayDecimal;

impl SerializeAs<Decimal> for DisplayDecimal {
    fn serialize_as<S>(source: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = *source;
        if value.scale() < DISPLAY_DECIMAL_PRECISION {
            value.rescale(DISPLAY_DECIMAL_PRECISION);
        }
        rust_decimal::serde::arbitrary_precision::serialize(&value, serializer)
    }
}

impl<'de> DeserializeAs<'de, Decimal> for DisplayDecimal {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
    }
}

/// Serde adapter for raw amounts: exact JSON numbers or numeric strings in,
/// exact JSON numbers out, with the scale left untouched.
pub struct ExactDecimal;

impl SerializeAs<Decimal> for ExactDecimal {
    fn serialize_as<S>(source: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::arbitrary_precision::serialize(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, Decimal> for ExactDecimal {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
    }
}
