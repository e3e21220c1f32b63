// ============================================================================
// Money
// Exact US dollar amount stored as sign, whole dollars, and cents
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::parse::{scan_currency, two_digit_value};
use super::value::MonetaryValue;
use crate::words;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact, immutable US dollar amount with cent precision.
///
/// The magnitude is held as unsigned dollars and cents with the sign kept
/// separately; all arithmetic runs on the canonical signed cent count via
/// [`MonetaryValue`], so values never drift the way binary floats do.
/// Zero is canonically non-negative: every constructor normalizes a
/// negative zero input, so `-0.00` and `0.00` are the same value.
///
/// ```
/// use usd_money::{Money, MonetaryValue};
///
/// let price: Money = "$19.99".parse().unwrap();
/// let tax: Money = "1.65".parse().unwrap();
/// assert_eq!(price.add(tax).unwrap().formatted_string(true), "$21.64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMoney"))]
pub struct Money {
    dollars: u64,
    cents: u8,
    negative: bool,
}

/// Unvalidated mirror of [`Money`] for deserialization; the `try_from`
/// hook funnels incoming data through the validating constructor so a
/// payload cannot materialize out-of-range fields.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMoney {
    dollars: u64,
    cents: u8,
    negative: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMoney> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawMoney) -> MoneyResult<Self> {
        Self::from_dollars_and_cents(raw.dollars, raw.cents, raw.negative)
    }
}

impl Money {
    /// Largest representable dollar amount. Chosen so the canonical cent
    /// count of any value, including its 99 cents, always fits an `i64`.
    pub const MAX_DOLLARS: u64 = ((i64::MAX - 99) / 100) as u64;

    /// A zero-dollar value.
    pub const ZERO: Money = Money {
        dollars: 0,
        cents: 0,
        negative: false,
    };

    /// Builds a value from its three fields.
    ///
    /// A `negative` flag on a zero magnitude is dropped.
    ///
    /// # Errors
    /// - `InvalidValue` if `cents` is 100 or more.
    /// - `Overflow` if `dollars` exceeds [`Money::MAX_DOLLARS`].
    pub fn from_dollars_and_cents(dollars: u64, cents: u8, negative: bool) -> MoneyResult<Self> {
        if cents > 99 {
            return Err(MoneyError::InvalidValue(format!(
                "cents must be less than 100, was {cents}"
            )));
        }
        if dollars > Self::MAX_DOLLARS {
            return Err(MoneyError::Overflow(format!(
                "{dollars} dollars exceeds the maximum of {}",
                Self::MAX_DOLLARS
            )));
        }
        let negative = negative && (dollars != 0 || cents != 0);
        Ok(Self {
            dollars,
            cents,
            negative,
        })
    }

    /// Builds a whole-dollar value from a signed integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds [`Money::MAX_DOLLARS`].
    pub fn from_int(dollars: i64) -> MoneyResult<Self> {
        Self::from_dollars_and_cents(dollars.unsigned_abs(), 0, dollars < 0)
    }

    /// Builds a value from a signed cent count, so `-123` becomes `-$1.23`.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds the canonical capacity.
    pub fn from_num_cents(num_cents: i64) -> MoneyResult<Self> {
        let magnitude = num_cents.unsigned_abs();
        Self::from_dollars_and_cents(magnitude / 100, (magnitude % 100) as u8, num_cents < 0)
    }

    /// Builds a value from a float by formatting it canonically and
    /// parsing the result.
    ///
    /// Rust's shortest-round-trip `Display` rendering never produces
    /// scientific notation or spurious digits, so a float that carries
    /// more than two decimal places fails the currency grammar rather
    /// than being silently rounded.
    ///
    /// # Errors
    /// - `InvalidValue` if `value` is NaN or infinite.
    /// - `Parse` if the value has sub-cent precision.
    pub fn from_f64(value: f64) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidValue(format!(
                "{value} is not a real number"
            )));
        }
        format!("{value}").parse()
    }

    /// Parses a string carrying up to `max_decimals` fraction digits,
    /// rounding half away from zero to whole cents: `"85.596"` with three
    /// decimals becomes `85.60`, and `"-85.996"` becomes `-86.00`.
    ///
    /// # Errors
    /// - `Parse` if the input does not match the currency grammar or the
    ///   fraction is longer than `max_decimals`.
    /// - `Overflow` if the rounded amount exceeds the dollar cap.
    pub fn from_string_rounded(s: &str, max_decimals: usize) -> MoneyResult<Self> {
        let (negative, dollars, frac) = scan_currency(s, max_decimals)?;
        if frac.len() <= 2 {
            return Self::from_dollars_and_cents(dollars, two_digit_value(frac), negative);
        }

        // Round the fraction to two places, half away from zero. The
        // divisor is an even power of ten so the half step is exact.
        let frac_value: u128 = frac
            .parse()
            .map_err(|_| MoneyError::Overflow(format!("fraction {frac} exceeds integer capacity")))?;
        let divisor = 10u128
            .checked_pow((frac.len() - 2) as u32)
            .ok_or_else(|| MoneyError::Overflow(format!("fraction {frac} is too long to round")))?;
        let rounded = (frac_value + divisor / 2) / divisor;

        // Cents rounding to 100 carries into the dollars
        let (dollars, cents) = if rounded == 100 {
            let carried = dollars.checked_add(1).ok_or_else(|| {
                MoneyError::Overflow(format!("dollar amount in {s} exceeds integer capacity"))
            })?;
            (carried, 0)
        } else {
            (dollars, rounded as u8)
        };
        Self::from_dollars_and_cents(dollars, cents, negative)
    }

    /// Converts an exact decimal at the API boundary.
    ///
    /// # Errors
    /// - `InvalidValue` if `value` carries sub-cent precision.
    /// - `Overflow` if the magnitude exceeds the canonical capacity.
    pub fn from_decimal(value: Decimal) -> MoneyResult<Self> {
        let scaled = value.checked_mul(Decimal::ONE_HUNDRED).ok_or_else(|| {
            MoneyError::Overflow(format!("{value} exceeds the canonical capacity"))
        })?;
        if !scaled.fract().is_zero() {
            return Err(MoneyError::InvalidValue(format!(
                "{value} has sub-cent precision"
            )));
        }
        let cents = scaled.to_i64().ok_or_else(|| {
            MoneyError::Overflow(format!("{value} exceeds the canonical capacity"))
        })?;
        Self::from_num_cents(cents)
    }

    /// The exact value as a `Decimal` with two fraction places.
    #[inline]
    pub fn to_decimal_exact(self) -> Decimal {
        Decimal::new(self.to_num_cents(), 2)
    }

    /// Whole dollars, not including cents.
    #[inline]
    pub fn dollars(self) -> u64 {
        self.dollars
    }

    /// Cents only, so `$1.50` returns 50.
    #[inline]
    pub fn cents(self) -> u8 {
        self.cents
    }

    /// Whether the value is below zero. Zero itself is never negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// The signed value as a float, for display and interop only. Cent
    /// counts above 2^53 lose precision here; arithmetic stays on
    /// [`to_num_cents`](Self::to_num_cents).
    #[inline]
    pub fn to_decimal(self) -> f64 {
        self.to_num_cents() as f64 / 100.0
    }

    /// The canonical signed cent count.
    #[inline]
    pub fn to_num_cents(self) -> i64 {
        // MAX_DOLLARS guarantees this cannot overflow
        let magnitude = self.dollars as i64 * 100 + self.cents as i64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Formats as `[-]d.cc` with zero-padded cents, optionally prefixed
    /// with a dollar sign placed before the minus: `$-123.45`.
    pub fn formatted_string(self, include_dollar_sign: bool) -> String {
        format!(
            "{}{}{}.{:02}",
            if include_dollar_sign { "$" } else { "" },
            if self.negative { "-" } else { "" },
            self.dollars,
            self.cents
        )
    }

    /// Like [`formatted_string`](Self::formatted_string) but with the
    /// dollars grouped by thousands commas: `1,032,234.43`. The result
    /// still round-trips through the parser.
    pub fn formatted_string_grouped(self, include_dollar_sign: bool) -> String {
        format!(
            "{}{}{}.{:02}",
            if include_dollar_sign { "$" } else { "" },
            if self.negative { "-" } else { "" },
            group_thousands(self.dollars),
            self.cents
        )
    }

    /// The value as spoken English, like `"Three dollars and sixteen
    /// cents"` for `$3.16`.
    ///
    /// Zero-valued parts are omitted (`$5.00` is `"Five dollars"`,
    /// `$0.07` is `"Seven cents"`), units pluralize, negatives lead with
    /// `"Negative"`, and zero is `"Zero dollars"`.
    pub fn to_words(self) -> String {
        let spoken_dollars = format!(
            "{} {}",
            words::to_words(self.dollars).to_lowercase(),
            if self.dollars == 1 { "dollar" } else { "dollars" }
        );
        let spoken_cents = format!(
            "{} {}",
            words::to_words(self.cents as u64).to_lowercase(),
            if self.cents == 1 { "cent" } else { "cents" }
        );

        let body = if self.cents == 0 {
            spoken_dollars
        } else if self.dollars == 0 {
            spoken_cents
        } else {
            format!("{spoken_dollars} and {spoken_cents}")
        };

        if self.negative {
            words::capitalize_first(&format!("negative {body}"))
        } else {
            words::capitalize_first(&body)
        }
    }
}

impl MonetaryValue for Money {
    const UNITS_PER_DOLLAR: i64 = 100;

    #[inline]
    fn from_smallest_units(units: i64) -> MoneyResult<Self> {
        Self::from_num_cents(units)
    }

    #[inline]
    fn smallest_units(self) -> i64 {
        self.to_num_cents()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses `[$][-][$]d[,ddd...][.cc]` exactly; no trimming, ASCII
    /// digits only, at most two fraction digits, a single digit meaning
    /// tenths. Degenerate matches like `""` or `"$"` parse to zero.
    fn from_str(s: &str) -> MoneyResult<Self> {
        let (negative, dollars, frac) = scan_currency(s, 2)?;
        Self::from_dollars_and_cents(dollars, two_digit_value(frac), negative)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted_string(false))
    }
}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_num_cents().cmp(&other.to_num_cents())
    }
}

fn group_thousands(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, byte) in digits.bytes().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(byte as char);
    }
    reversed.chars().rev().collect()
}
