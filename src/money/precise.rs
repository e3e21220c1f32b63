// ============================================================================
// PreciseMoney
// US dollar amount tracked to hundredths of a cent
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::parse::{scan_currency, two_digit_value};
use super::policy::PartialCentsPolicy;
use super::usd::Money;
use super::value::MonetaryValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact US dollar amount carrying hundredths of a cent, for rates,
/// unit prices, and intermediate math that must not lose sub-cent
/// precision.
///
/// This is deliberately not a formattable type: there is no `Display`,
/// no formatted string, and no spoken-words rendering, because a
/// sub-cent amount has no faithful human-readable dollar form. Callers
/// reduce precision explicitly with [`round_to_cents`](Self::round_to_cents)
/// and format the resulting [`Money`].
///
/// Zero is canonically non-negative, as with [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPreciseMoney"))]
pub struct PreciseMoney {
    dollars: u64,
    cents: u8,
    partial_cents: u8,
    negative: bool,
}

/// Unvalidated mirror of [`PreciseMoney`] for deserialization; the
/// `try_from` hook funnels incoming data through the validating
/// constructor so a payload cannot materialize out-of-range fields.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPreciseMoney {
    dollars: u64,
    cents: u8,
    partial_cents: u8,
    negative: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPreciseMoney> for PreciseMoney {
    type Error = MoneyError;

    fn try_from(raw: RawPreciseMoney) -> MoneyResult<Self> {
        Self::from_dollars_cents_and_partial_cents(
            raw.dollars,
            raw.cents,
            raw.partial_cents,
            raw.negative,
        )
    }
}

impl PreciseMoney {
    /// Largest representable dollar amount; the canonical partial-cent
    /// count of any value always fits an `i64`.
    pub const MAX_DOLLARS: u64 = ((i64::MAX - 9_999) / 10_000) as u64;

    /// A zero-dollar value.
    pub const ZERO: PreciseMoney = PreciseMoney {
        dollars: 0,
        cents: 0,
        partial_cents: 0,
        negative: false,
    };

    /// Builds a value from its four fields. `partial_cents` counts
    /// hundredths of a cent, so `(1, 23, 45, false)` is `$1.2345`.
    ///
    /// A `negative` flag on a zero magnitude is dropped.
    ///
    /// # Errors
    /// - `InvalidValue` if `cents` or `partial_cents` is 100 or more.
    /// - `Overflow` if `dollars` exceeds [`PreciseMoney::MAX_DOLLARS`].
    pub fn from_dollars_cents_and_partial_cents(
        dollars: u64,
        cents: u8,
        partial_cents: u8,
        negative: bool,
    ) -> MoneyResult<Self> {
        if cents > 99 {
            return Err(MoneyError::InvalidValue(format!(
                "cents must be less than 100, was {cents}"
            )));
        }
        if partial_cents > 99 {
            return Err(MoneyError::InvalidValue(format!(
                "partial cents must be less than 100, was {partial_cents}"
            )));
        }
        if dollars > Self::MAX_DOLLARS {
            return Err(MoneyError::Overflow(format!(
                "{dollars} dollars exceeds the maximum of {}",
                Self::MAX_DOLLARS
            )));
        }
        let negative = negative && (dollars != 0 || cents != 0 || partial_cents != 0);
        Ok(Self {
            dollars,
            cents,
            partial_cents,
            negative,
        })
    }

    /// Builds a whole-dollar value from a signed integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds
    /// [`PreciseMoney::MAX_DOLLARS`].
    pub fn from_int(dollars: i64) -> MoneyResult<Self> {
        Self::from_dollars_cents_and_partial_cents(dollars.unsigned_abs(), 0, 0, dollars < 0)
    }

    /// Builds a value from a signed partial-cent count, so `-12345`
    /// becomes `-$1.2345`.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds the canonical capacity.
    pub fn from_num_partial_cents(num_partial_cents: i64) -> MoneyResult<Self> {
        let magnitude = num_partial_cents.unsigned_abs();
        Self::from_dollars_cents_and_partial_cents(
            magnitude / 10_000,
            ((magnitude % 10_000) / 100) as u8,
            (magnitude % 100) as u8,
            num_partial_cents < 0,
        )
    }

    /// Builds a value from a float, tolerating only representation noise
    /// beyond the fourth decimal place.
    ///
    /// The input rounded to four decimals must reproduce it to within
    /// 0.00001; `123.45678` is rejected while `0.1 + 0.2` parses as
    /// `0.3000` despite its trailing binary noise.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `value` is not finite or carries real
    /// precision past the fourth decimal place.
    pub fn from_f64(value: f64) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidValue(format!(
                "{value} is not a real number"
            )));
        }
        let rounded = (value * 10_000.0).round() / 10_000.0;
        if (value - rounded).abs() >= 0.00001 {
            return Err(MoneyError::InvalidValue(format!(
                "{value} carries precision beyond partial cents"
            )));
        }
        format!("{rounded}").parse()
    }

    /// Converts an exact decimal at the API boundary.
    ///
    /// # Errors
    /// - `InvalidValue` if `value` carries sub-partial-cent precision.
    /// - `Overflow` if the magnitude exceeds the canonical capacity.
    pub fn from_decimal(value: Decimal) -> MoneyResult<Self> {
        let scaled = value
            .checked_mul(Decimal::from(10_000))
            .ok_or_else(|| MoneyError::Overflow(format!("{value} exceeds the canonical capacity")))?;
        if !scaled.fract().is_zero() {
            return Err(MoneyError::InvalidValue(format!(
                "{value} has sub-partial-cent precision"
            )));
        }
        let units = scaled.to_i64().ok_or_else(|| {
            MoneyError::Overflow(format!("{value} exceeds the canonical capacity"))
        })?;
        Self::from_num_partial_cents(units)
    }

    /// The exact value as a `Decimal` with four fraction places.
    #[inline]
    pub fn to_decimal_exact(self) -> Decimal {
        Decimal::new(self.to_num_partial_cents(), 4)
    }

    /// Whole dollars, not including cents.
    #[inline]
    pub fn dollars(self) -> u64 {
        self.dollars
    }

    /// Cents only, so `$1.5025` returns 50.
    #[inline]
    pub fn cents(self) -> u8 {
        self.cents
    }

    /// Hundredths of a cent only, so `$1.5025` returns 25.
    #[inline]
    pub fn partial_cents(self) -> u8 {
        self.partial_cents
    }

    /// Whether the value is below zero. Zero itself is never negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// The signed value as a float, for interop only.
    #[inline]
    pub fn to_decimal(self) -> f64 {
        self.to_num_partial_cents() as f64 / 10_000.0
    }

    /// The canonical signed partial-cent count.
    #[inline]
    pub fn to_num_partial_cents(self) -> i64 {
        // MAX_DOLLARS guarantees this cannot overflow
        let magnitude =
            self.dollars as i64 * 10_000 + self.cents as i64 * 100 + self.partial_cents as i64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Reduces precision to whole cents, resolving any partial cents
    /// through `policy`. This is the explicit step before formatting:
    /// `value.round_to_cents(policy)?.formatted_string(true)`.
    ///
    /// Values with zero partial cents convert exactly under any policy.
    ///
    /// # Errors
    /// Returns `PartialCents` under [`PartialCentsPolicy::Throw`] when
    /// partial cents are present.
    pub fn round_to_cents(self, policy: PartialCentsPolicy) -> MoneyResult<Money> {
        // Integer reduction throughout; a float quotient would lose cent
        // precision above 2^53
        let units = self.to_num_partial_cents();
        let cents = units / 100;
        let remainder = units % 100;
        if remainder == 0 {
            return Money::from_num_cents(cents);
        }
        let cents = match policy {
            PartialCentsPolicy::Throw => {
                return Err(MoneyError::PartialCents("round_to_cents"));
            }
            PartialCentsPolicy::RoundUp => cents + remainder.signum(),
            PartialCentsPolicy::RoundDown => cents,
            PartialCentsPolicy::RoundNearest => {
                if remainder.abs() >= 50 {
                    cents + remainder.signum()
                } else {
                    cents
                }
            }
        };
        Money::from_num_cents(cents)
    }
}

impl MonetaryValue for PreciseMoney {
    const UNITS_PER_DOLLAR: i64 = 10_000;

    #[inline]
    fn from_smallest_units(units: i64) -> MoneyResult<Self> {
        Self::from_num_partial_cents(units)
    }

    #[inline]
    fn smallest_units(self) -> i64 {
        self.to_num_partial_cents()
    }
}

impl FromStr for PreciseMoney {
    type Err = MoneyError;

    /// Parses `[$][-][$]d[,ddd...][.cccc]` with up to four fraction
    /// digits. Unlike [`Money`], the empty string is rejected outright.
    /// A three-digit fraction reads its last digit as tenths of a
    /// partial cent, so `"1.234"` is `$1.2340`.
    fn from_str(s: &str) -> MoneyResult<Self> {
        if s.is_empty() {
            return Err(MoneyError::InvalidValue(
                "cannot parse an empty string as precise currency".to_string(),
            ));
        }
        let (negative, dollars, frac) = scan_currency(s, 4)?;
        let (cents, partial_cents) = if frac.len() <= 2 {
            (two_digit_value(frac), 0)
        } else {
            (two_digit_value(&frac[..2]), two_digit_value(&frac[2..]))
        };
        Self::from_dollars_cents_and_partial_cents(dollars, cents, partial_cents, negative)
    }
}

impl PartialOrd for PreciseMoney {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseMoney {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_num_partial_cents().cmp(&other.to_num_partial_cents())
    }
}
