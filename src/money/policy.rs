// ============================================================================
// Partial-Cents Policy
// Caller-selected resolution for fractional smallest units
// ============================================================================

use super::errors::{MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when multiplication or division produces a fractional
/// smallest unit (a partial cent for [`Money`](crate::Money), a partial
/// ten-thousandth for [`PreciseMoney`](crate::PreciseMoney)).
///
/// Exactly integral results bypass the policy entirely, so `Throw` only
/// fails when precision would actually be lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartialCentsPolicy {
    /// Fail with [`MoneyError::PartialCents`] (the default)
    #[default]
    Throw,
    /// Round away from zero (magnitude up)
    RoundUp,
    /// Round toward zero (magnitude down)
    RoundDown,
    /// Round half away from zero
    RoundNearest,
}

/// `i64::MAX as f64` rounds up to 2^63, so anything at or above it does
/// not fit an i64.
const I64_MAX_F: f64 = i64::MAX as f64;

/// Resolves a raw smallest-unit amount to an exact integer count.
///
/// `raw` is the unrounded product/quotient of a signed smallest-unit count
/// and a scalar. Exactly integral values pass through unconditionally;
/// fractional values are resolved per `policy`. `op` names the operation
/// for the `Throw` error payload.
///
/// # Errors
/// - `PartialCents` if `raw` is fractional and the policy is `Throw`.
/// - `Overflow` if `raw` is non-finite or the rounded result exceeds i64.
pub(crate) fn resolve_partial_units(
    raw: f64,
    policy: PartialCentsPolicy,
    op: &'static str,
) -> MoneyResult<i64> {
    if !raw.is_finite() {
        return Err(MoneyError::Overflow(format!("{op} result is not finite")));
    }

    let rounded = if raw.fract() == 0.0 {
        raw
    } else {
        let rounded = match policy {
            PartialCentsPolicy::Throw => return Err(MoneyError::PartialCents(op)),
            PartialCentsPolicy::RoundUp => {
                if raw < 0.0 {
                    (raw - 0.5).round()
                } else {
                    (raw + 0.5).round()
                }
            },
            PartialCentsPolicy::RoundDown => {
                if raw < 0.0 {
                    (raw + 0.5).round()
                } else {
                    (raw - 0.5).round()
                }
            },
            PartialCentsPolicy::RoundNearest => raw.round(),
        };
        tracing::debug!(raw, rounded, ?policy, op, "resolved partial smallest units");
        rounded
    };

    if rounded >= I64_MAX_F || rounded < i64::MIN as f64 {
        return Err(MoneyError::Overflow(format!(
            "{op} result {rounded} exceeds smallest-unit capacity"
        )));
    }
    Ok(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_results_bypass_policy() {
        for policy in [
            PartialCentsPolicy::Throw,
            PartialCentsPolicy::RoundUp,
            PartialCentsPolicy::RoundDown,
            PartialCentsPolicy::RoundNearest,
        ] {
            assert_eq!(resolve_partial_units(50.0, policy, "multiply"), Ok(50));
            assert_eq!(resolve_partial_units(-50.0, policy, "multiply"), Ok(-50));
            assert_eq!(resolve_partial_units(0.0, policy, "multiply"), Ok(0));
        }
    }

    #[test]
    fn test_throw_on_fractional() {
        assert_eq!(
            resolve_partial_units(33.3, PartialCentsPolicy::Throw, "multiply"),
            Err(MoneyError::PartialCents("multiply"))
        );
    }

    #[test]
    fn test_round_up_moves_away_from_zero() {
        assert_eq!(
            resolve_partial_units(33.3, PartialCentsPolicy::RoundUp, "multiply"),
            Ok(34)
        );
        assert_eq!(
            resolve_partial_units(-33.3, PartialCentsPolicy::RoundUp, "multiply"),
            Ok(-34)
        );
    }

    #[test]
    fn test_round_down_moves_toward_zero() {
        assert_eq!(
            resolve_partial_units(33.9, PartialCentsPolicy::RoundDown, "divide"),
            Ok(33)
        );
        assert_eq!(
            resolve_partial_units(-33.9, PartialCentsPolicy::RoundDown, "divide"),
            Ok(-33)
        );
    }

    #[test]
    fn test_round_nearest_is_half_away_from_zero() {
        assert_eq!(
            resolve_partial_units(33.3, PartialCentsPolicy::RoundNearest, "multiply"),
            Ok(33)
        );
        assert_eq!(
            resolve_partial_units(33.5, PartialCentsPolicy::RoundNearest, "multiply"),
            Ok(34)
        );
        assert_eq!(
            resolve_partial_units(-33.5, PartialCentsPolicy::RoundNearest, "multiply"),
            Ok(-34)
        );
    }

    #[test]
    fn test_non_finite_raw_overflows() {
        assert!(matches!(
            resolve_partial_units(f64::INFINITY, PartialCentsPolicy::RoundNearest, "divide"),
            Err(MoneyError::Overflow(_))
        ));
        assert!(matches!(
            resolve_partial_units(f64::NAN, PartialCentsPolicy::Throw, "multiply"),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_out_of_range_overflows() {
        assert!(matches!(
            resolve_partial_units(2.0_f64.powi(64), PartialCentsPolicy::RoundNearest, "multiply"),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_default_policy_is_throw() {
        assert_eq!(PartialCentsPolicy::default(), PartialCentsPolicy::Throw);
    }
}
