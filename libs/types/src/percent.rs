//! Exact rational percentages
//!
//! Price impact is reported as a non-negative rational over a 10000
//! denominator (basis points). The rational form is exact; `Decimal`
//! conversion exists for display only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis points denominator: 10000 parts make the whole.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A non-negative exact rational, rendered as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent {
    numerator: u64,
    denominator: u64,
}

impl Percent {
    /// Build from an explicit fraction. A zero denominator is normalized to
    /// the basis-points denominator so the value stays well-defined.
    pub fn new(numerator: u64, denominator: u64) -> Self {
        let denominator = if denominator == 0 {
            BPS_DENOMINATOR
        } else {
            denominator
        };
        Self {
            numerator,
            denominator,
        }
    }

    /// `bps` parts per 10000.
    pub fn from_bps(bps: u64) -> Self {
        Self::new(bps, BPS_DENOMINATOR)
    }

    pub fn zero() -> Self {
        Self::from_bps(0)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Percentage value for display (1 bps → 0.01).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.numerator) * Decimal::from(100u64) / Decimal::from(self.denominator)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bps_to_percent_display() {
        assert_eq!(Percent::from_bps(1).to_decimal(), dec!(0.01));
        assert_eq!(Percent::from_bps(10_000).to_decimal(), dec!(100));
        assert_eq!(Percent::from_bps(250).to_decimal(), dec!(2.5));
    }

    #[test]
    fn test_zero() {
        assert!(Percent::zero().is_zero());
        assert!(!Percent::from_bps(1).is_zero());
    }

    #[test]
    fn test_zero_denominator_normalized() {
        let p = Percent::new(5, 0);
        assert_eq!(p.denominator(), BPS_DENOMINATOR);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percent::from_bps(123).to_string(), "1.23%");
    }
}
