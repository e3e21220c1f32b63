// ============================================================================
// MonetaryValue Trait
// Shared arithmetic and comparison over the canonical smallest-unit integer
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::policy::{resolve_partial_units, PartialCentsPolicy};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

/// The capability set shared by [`Money`](crate::Money) and
/// [`PreciseMoney`](crate::PreciseMoney).
///
/// Every operation works on the canonical signed smallest-unit integer
/// (cents, or partial cents for the precise type), never on decomposed
/// fields or floats, so repeated arithmetic cannot accumulate rounding
/// error. Implementors only supply the two canonical conversions; the
/// arithmetic comes for free.
///
/// Comparison is the `Ord` bound: `a < b`, `a.max(b)`, and `a.cmp(&b)`
/// are all consistent with the canonical integer by construction.
pub trait MonetaryValue: Copy + Ord + Sized {
    /// Smallest tracked units per dollar (100 for cents, 10,000 for
    /// partial cents).
    const UNITS_PER_DOLLAR: i64;

    /// Reconstructs a value from a signed count of smallest units.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude cannot be represented.
    fn from_smallest_units(units: i64) -> MoneyResult<Self>;

    /// The canonical signed count of smallest units.
    fn smallest_units(self) -> i64;

    /// Whether the value is zero.
    #[inline]
    fn is_zero(self) -> bool {
        self.smallest_units() == 0
    }

    /// Exact addition on smallest-unit counts.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum exceeds the canonical capacity.
    fn add(self, other: Self) -> MoneyResult<Self> {
        let sum = self
            .smallest_units()
            .checked_add(other.smallest_units())
            .ok_or_else(|| MoneyError::Overflow("sum exceeds smallest-unit capacity".to_string()))?;
        Self::from_smallest_units(sum)
    }

    /// Exact subtraction on smallest-unit counts.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference exceeds the canonical capacity.
    fn subtract(self, other: Self) -> MoneyResult<Self> {
        let diff = self
            .smallest_units()
            .checked_sub(other.smallest_units())
            .ok_or_else(|| {
                MoneyError::Overflow("difference exceeds smallest-unit capacity".to_string())
            })?;
        Self::from_smallest_units(diff)
    }

    /// Multiplies by a scalar, resolving any fractional smallest unit
    /// through `policy`.
    ///
    /// Exactly integral products bypass the policy, so multiplying even
    /// cent counts by 0.5 succeeds under [`PartialCentsPolicy::Throw`].
    ///
    /// # Errors
    /// - `InvalidValue` if `scalar` is not a real number.
    /// - `PartialCents` under `Throw` when precision would be lost.
    /// - `Overflow` if the result exceeds the canonical capacity.
    fn multiply(self, scalar: f64, policy: PartialCentsPolicy) -> MoneyResult<Self> {
        if !scalar.is_finite() {
            return Err(MoneyError::InvalidValue(format!(
                "scalar {scalar} is not a real number"
            )));
        }
        let raw = self.smallest_units() as f64 * scalar;
        Self::from_smallest_units(resolve_partial_units(raw, policy, "multiply")?)
    }

    /// Divides by a scalar, resolving any fractional smallest unit
    /// through `policy`.
    ///
    /// # Errors
    /// - `DivideByZero` if `scalar` is zero.
    /// - `InvalidValue` if `scalar` is not a real number.
    /// - `PartialCents` under `Throw` when precision would be lost.
    /// - `Overflow` if the result exceeds the canonical capacity.
    fn divide(self, scalar: f64, policy: PartialCentsPolicy) -> MoneyResult<Self> {
        if scalar == 0.0 {
            return Err(MoneyError::DivideByZero);
        }
        if !scalar.is_finite() {
            return Err(MoneyError::InvalidValue(format!(
                "scalar {scalar} is not a real number"
            )));
        }
        let raw = self.smallest_units() as f64 / scalar;
        Self::from_smallest_units(resolve_partial_units(raw, policy, "divide")?)
    }

    /// The percentage that `a` is of `b`, rounded half away from zero to
    /// `num_decimals` places (0–3 inclusive).
    ///
    /// The division runs in `rust_decimal` so the ratio itself carries no
    /// binary floating-point error before rounding.
    ///
    /// # Errors
    /// - `InvalidValue` if `num_decimals` is outside `0..=3`.
    /// - `DivideByZero` if `b` is zero-valued.
    fn percent(a: Self, b: Self, num_decimals: u32) -> MoneyResult<f64> {
        if num_decimals > 3 {
            return Err(MoneyError::InvalidValue(format!(
                "num_decimals must be in 0..=3, was {num_decimals}"
            )));
        }
        if b.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        let ratio = Decimal::from(a.smallest_units()) * Decimal::from(100)
            / Decimal::from(b.smallest_units());
        ratio
            .round_dp_with_strategy(num_decimals, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .ok_or_else(|| MoneyError::Overflow("percent result exceeds f64 range".to_string()))
    }

    /// Three-way comparison: `Less` when `a < b`, `Greater` when `a > b`.
    #[inline]
    fn compare(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }
}
