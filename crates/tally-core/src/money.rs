//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    7.95 + 24.95 + 4.95 = 37.849999999999994  ❌ truncates to 37.84!    │
//! │                                                                         │
//! │  THE INTEGER-CENTS PROBLEM                                              │
//! │    "second pair half price" on £32.95 charges £49.425 for the bundle.  │
//! │    Cents cannot hold 49.425 - rounding inside the algorithm loses      │
//! │    the half-cent that decides whether the grand total is 54.37 or 54.38│
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic end to end. Sub-cent precision survives    │
//! │    until the one place that may drop it: currency formatting, which    │
//! │    truncates (never rounds up) to the cent.                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_core::Money;
//!
//! let price = Money::from_major_minor(32, 95); // £32.95
//! let bundle = price * Decimal::new(15, 1);    // × 1.5 = £49.425, exact
//! assert_eq!(bundle.formatted(), "£49.42");    // truncated at the boundary
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency symbol prefixed to every formatted amount.
///
/// Tally prices a single currency; multi-currency arithmetic is out of scope.
pub const CURRENCY_SYMBOL: &str = "£";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount backed by exact decimal arithmetic.
///
/// ## Design Decisions
/// - **Full precision internally**: offer math produces sub-cent amounts
///   (e.g. £49.425) that must not be rounded mid-calculation
/// - **Truncation at the boundary**: [`Money::formatted`] drops everything
///   past the second decimal place, never rounding up
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (pounds and pence).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let price = Money::from_major_minor(32, 95); // £32.95
    /// assert_eq!(price.formatted(), "£32.95");
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -£5.50, not -£4.50.
    #[inline]
    pub fn from_major_minor(major: i64, minor: u32) -> Self {
        let minor = i64::from(minor);
        let cents = if major < 0 {
            major * 100 - minor
        } else {
            major * 100 + minor
        };
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount at full precision.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Truncates to the cent, dropping (never rounding up) sub-cent digits.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::Money;
    ///
    /// let total = Money::new(Decimal::new(54375, 3)); // 54.375
    /// assert_eq!(total.truncated(), Decimal::new(5437, 2)); // 54.37
    /// ```
    #[inline]
    pub fn truncated(&self) -> Decimal {
        self.0.trunc_with_scale(2)
    }

    /// Formats as a currency string: symbol prefix, exactly two decimals,
    /// truncated to the cent.
    ///
    /// £54.375 formats as "£54.37", not "£54.38". The customer is never
    /// charged a cent that is not fully owed.
    pub fn formatted(&self) -> String {
        format!("{}{:.2}", CURRENCY_SYMBOL, self.truncated())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display delegates to [`Money::formatted`]: truncated, two decimals,
/// symbol prefix.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a decimal factor (bundle-unit math).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

/// Summing an iterator of prices yields the basket subtotal.
/// An empty iterator sums to zero (empty basket costs nothing).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(32, 95).amount(), dec!(32.95));
        assert_eq!(Money::from_major_minor(5, 0).amount(), dec!(5));
        assert_eq!(Money::from_major_minor(-5, 50).amount(), dec!(-5.50));
    }

    #[test]
    fn test_formatted_truncates_never_rounds_up() {
        assert_eq!(Money::new(dec!(54.375)).formatted(), "£54.37");
        assert_eq!(Money::new(dec!(49.425)).formatted(), "£49.42");
        assert_eq!(Money::new(dec!(98.279)).formatted(), "£98.27");
    }

    #[test]
    fn test_formatted_always_two_decimals() {
        assert_eq!(Money::new(dec!(37.85)).formatted(), "£37.85");
        assert_eq!(Money::new(dec!(5)).formatted(), "£5.00");
        assert_eq!(Money::zero().formatted(), "£0.00");
        assert_eq!(Money::new(dec!(60.8)).formatted(), "£60.80");
    }

    #[test]
    fn test_display_matches_formatted() {
        let total = Money::new(dec!(54.375));
        assert_eq!(format!("{total}"), total.formatted());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(2.50));

        assert_eq!((a + b).amount(), dec!(12.50));
        assert_eq!((a - b).amount(), dec!(7.50));
        assert_eq!((a * dec!(1.5)).amount(), dec!(15.00));

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.amount(), dec!(12.50));
    }

    #[test]
    fn test_bundle_math_keeps_sub_cent_precision() {
        // "second pair half price": 32.95 × (2 − 0.5)
        let bundle = Money::new(dec!(32.95)) * (dec!(2) - dec!(0.5));
        assert_eq!(bundle.amount(), dec!(49.425));
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_checks() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::new(dec!(-1)).is_negative());
    }
}
