// ============================================================================
// USD Money Library
// Exact fixed-point US dollar arithmetic with parsing, formatting, and words
// ============================================================================

//! # USD Money
//!
//! Exact US dollar values that never suffer binary floating-point drift.
//!
//! ## Features
//!
//! - **Exact arithmetic** on a canonical signed smallest-unit integer
//! - **Two precisions**: [`Money`] tracks cents, [`PreciseMoney`] tracks
//!   hundredths of a cent for rates and intermediate math
//! - **Strict parsing** of `$-1,234.56` style strings
//! - **Explicit rounding** via [`PartialCentsPolicy`] whenever an
//!   operation would lose precision
//! - **Spoken-word formatting** ("Three dollars and sixteen cents")
//!
//! ## Example
//!
//! ```rust
//! use usd_money::prelude::*;
//!
//! let subtotal: Money = "$1,032.50".parse().unwrap();
//! let shipping = Money::from_num_cents(995).unwrap();
//! let total = subtotal.add(shipping).unwrap();
//! assert_eq!(total.formatted_string_grouped(true), "$1,042.45");
//!
//! // Fractional results demand an explicit policy
//! let third = total.multiply(0.333, PartialCentsPolicy::RoundNearest).unwrap();
//! assert_eq!(third.formatted_string(false), "347.14");
//!
//! // Sub-cent rates stay exact until explicitly reduced
//! let rate: PreciseMoney = "0.0375".parse().unwrap();
//! let fee = rate.multiply(1000.0, PartialCentsPolicy::Throw).unwrap();
//! assert_eq!(fee.round_to_cents(PartialCentsPolicy::Throw).unwrap().to_string(), "37.50");
//! ```

pub mod money;
pub mod words;

// Re-exports for convenience
pub use money::{MonetaryValue, Money, MoneyError, MoneyResult, PartialCentsPolicy, PreciseMoney};

pub mod prelude {
    pub use crate::money::{
        MonetaryValue, Money, MoneyError, MoneyResult, PartialCentsPolicy, PreciseMoney,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_invoice_round_trip() {
        let line_items: Vec<Money> = ["19.99", "4.50", "1,250.00", "-25.00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut total = Money::ZERO;
        for item in &line_items {
            total = total.add(*item).unwrap();
        }
        assert_eq!(total.formatted_string_grouped(true), "$1,249.49");

        // Formatted output parses back to the same value
        let reparsed: Money = total.formatted_string_grouped(true).parse().unwrap();
        assert_eq!(reparsed, total);
        assert_eq!(
            total.to_words(),
            "One thousand two hundred forty-nine dollars and forty-nine cents"
        );
    }

    #[test]
    fn test_precise_rate_to_statement_amount() {
        // A per-unit rate too fine for cents
        let rate: PreciseMoney = "0.0025".parse().unwrap();
        let accrued = rate.multiply(1_234.0, PartialCentsPolicy::Throw).unwrap();
        assert_eq!(accrued.to_num_partial_cents(), 30_850);

        // Reducing precision is an explicit, policy-driven step
        assert_eq!(
            accrued
                .round_to_cents(PartialCentsPolicy::RoundNearest)
                .unwrap(),
            "3.09".parse().unwrap()
        );

        // The same reduction under Throw is refused mid-cent
        let odd = PreciseMoney::from_num_partial_cents(30_851).unwrap();
        assert!(matches!(
            odd.round_to_cents(PartialCentsPolicy::Throw),
            Err(MoneyError::PartialCents(_))
        ));
    }

    #[test]
    fn test_percent_of_budget() {
        let spent: Money = "333.33".parse().unwrap();
        let budget: Money = "1000.00".parse().unwrap();
        assert_eq!(Money::percent(spent, budget, 2).unwrap(), 33.33);
        assert_eq!(Money::percent(spent, budget, 1).unwrap(), 33.3);
        assert_eq!(
            Money::percent(spent, Money::ZERO, 2),
            Err(MoneyError::DivideByZero)
        );
    }

    #[test]
    fn test_sorting_mixed_signs() {
        let mut values: Vec<Money> = ["0.00", "-10.50", "3.99", "-0.01", "1000.00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        values.sort();
        let ordered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(ordered, vec!["-10.50", "-0.01", "0.00", "3.99", "1000.00"]);
    }
}
