//! Validation of `[min, max]` roll ranges.
//!
//! Every randomizer runs [`validate_min_max`] before drawing. Bounds that
//! arrive as untyped numbers (command-line arguments, JSON) are read as
//! [`RawBound`]s and go through [`validate_raw_bounds`] first, which adds
//! the whole-number and 64-bit checks.

use std::str::FromStr;

use crate::error::{DiceError, DiceResult};

/// `-2^63`, the smallest float that converts to `i64` exactly.
const I64_FLOOR: f64 = -9_223_372_036_854_775_808.0;
/// `2^63`, the smallest float too large for `i64`.
const I64_CEILING: f64 = 9_223_372_036_854_775_808.0;

/// A range bound as a user wrote it, before validation.
///
/// Integer text parses to [`RawBound::Integer`] without going through a
/// float, so large bounds keep every digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawBound {
    /// A bound written as an integer.
    Integer(i64),
    /// Any other number.
    Number(f64),
}

impl RawBound {
    /// The bound as a float, for messages.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Number(value) => value,
        }
    }

    fn to_integer(self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(value),
            Self::Number(value) if (I64_FLOOR..I64_CEILING).contains(&value) => {
                Some(value as i64)
            }
            Self::Number(_) => None,
        }
    }
}

impl From<i64> for RawBound {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawBound {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl FromStr for RawBound {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self::Integer(value));
        }
        s.parse::<f64>()
            .map(Self::Number)
            .map_err(|_| DiceError::UnparsableBound(s.to_string()))
    }
}

/// Check that both bounds are at least 1 and that `min <= max`.
pub fn validate_min_max(min: i64, max: i64) -> DiceResult<()> {
    if min < 1 || max < 1 {
        return Err(DiceError::NonPositiveRange { min, max });
    }
    if min > max {
        return Err(DiceError::InvertedRange { min, max });
    }
    Ok(())
}

/// Validate untyped bounds and convert them.
///
/// Fails on fractional, infinite or NaN bounds, then on whole numbers
/// outside `i64`, before applying the checks of [`validate_min_max`].
pub fn validate_raw_bounds(
    min: impl Into<RawBound>,
    max: impl Into<RawBound>,
) -> DiceResult<(i64, i64)> {
    let (min, max) = (min.into(), max.into());
    let (raw_min, raw_max) = (min.as_f64(), max.as_f64());
    if !is_whole(raw_min) || !is_whole(raw_max) {
        return Err(DiceError::NonIntegerRange {
            min: raw_min,
            max: raw_max,
        });
    }
    let (Some(min), Some(max)) = (min.to_integer(), max.to_integer()) else {
        return Err(DiceError::BoundOutOfRange {
            min: raw_min,
            max: raw_max,
        });
    };
    validate_min_max(min, max)?;
    Ok((min, max))
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
