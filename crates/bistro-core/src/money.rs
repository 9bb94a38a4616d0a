//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING PROBLEM                                                   │
//! │                                                                         │
//! │  Binary floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents:                                                         │
//! │    97.40 × 14% = 13.636  → 13.64 stored, 0.004 invented per order  ❌   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, round only when printing               │
//! │    subtotal, discount, tax and total keep every digit                   │
//! │    the bill shows 13.64, the payment is charged 111.036 exactly        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//! use bistro_core::types::TaxRate;
//!
//! let price = Money::from_major(80);
//! let tax = price.calculate_tax(TaxRate::from_bps(1400));
//!
//! assert_eq!(tax, Money::from_cents(1120));
//! assert_eq!(tax.to_string(), "11.20 EGP");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::{DiscountRate, TaxRate};
use crate::CURRENCY_CODE;

/// Number of decimal places shown on bills and prompts.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Decimal places of a basis-point fraction (1 bps = 0.0001).
const BPS_SCALE: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact base-10 decimal.
///
/// ## Design Decisions
/// - **Decimal, not f64**: arithmetic is exact, so accumulating many lines
///   never drifts
/// - **Signed**: discounts are subtracted and may be shown negated
/// - **No implicit rounding**: only [`Money::rounded`] and `Display` round
///
/// ## Where Money Flows
/// ```text
/// Item.price ──► wrap() adds add-on deltas ──► Order line price
///                                                   │
///              per-line discount ◄──────────────────┤
///                                                   ▼
///        Bill.subtotal − Bill.discount ──► tax ──► Bill.total ──► payment()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(65).to_string(), "65.00 EGP");
    /// ```
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Creates a Money value from the minor unit (1/100).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99 EGP");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact underlying amount.
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `bps / 10000` of this amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let part = Money::from_major(65).portion(800); // 8%
    /// assert_eq!(part, Money::from_cents(520));
    /// ```
    pub fn portion(&self, bps: u32) -> Money {
        Money(self.0 * Decimal::new(i64::from(bps), BPS_SCALE))
    }

    /// Calculates tax on this amount. The result keeps full precision.
    ///
    /// ## User Workflow
    /// ```text
    /// After discount: 97.40
    ///      │
    ///      ▼
    /// calculate_tax(14%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: 13.636 (printed as 13.64)
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.portion(rate.bps())
    }

    /// Calculates the discount amount for this price at the given rate.
    pub fn calculate_discount(&self, rate: DiscountRate) -> Money {
        self.portion(rate.bps())
    }

    /// Rounds to two decimal places, half away from zero.
    ///
    /// Only used at the display boundary; billing never rounds between steps.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let total = Money::new(Decimal::new(111_036, 3)); // 111.036
    /// assert_eq!(total.rounded(), Money::from_cents(11104));
    /// ```
    pub fn rounded(&self) -> Money {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        value.rescale(DISPLAY_DECIMALS);
        Money(value)
    }

    /// Formats the rounded amount without the currency label ("82.08").
    pub fn format_amount(&self) -> String {
        self.rounded().0.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to two places followed by the currency code.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_amount(), CURRENCY_CODE)
    }
}

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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
    fn test_constructors_agree() {
        assert_eq!(Money::from_major(80), Money::from_cents(8000));
        assert_eq!(Money::from_major(80), Money::new(dec!(80.0)));
        assert_eq!(Money::from_cents(1099).amount(), dec!(10.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(80).to_string(), "80.00 EGP");
        assert_eq!(Money::from_cents(1099).to_string(), "10.99 EGP");
        assert_eq!(Money::from_cents(-800).to_string(), "-8.00 EGP");
        assert_eq!(Money::zero().to_string(), "0.00 EGP");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Money::new(dec!(13.636)).format_amount(), "13.64");
        assert_eq!(Money::new(dec!(111.036)).format_amount(), "111.04");
        assert_eq!(Money::new(dec!(0.005)).format_amount(), "0.01");
        assert_eq!(Money::new(dec!(-0.005)).format_amount(), "-0.01");
        assert_eq!(Money::new(dec!(-0.001)).format_amount(), "0.00");
    }

    #[test]
    fn test_rounding_does_not_touch_original() {
        let tax = Money::new(dec!(13.636));
        let _ = tax.rounded();
        assert_eq!(tax.amount(), dec!(13.636));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_cents(250);

        assert_eq!(a + b, Money::new(dec!(12.50)));
        assert_eq!(a - b, Money::new(dec!(7.50)));

        let mut c = a;
        c += b;
        c -= Money::from_major(2);
        assert_eq!(c, Money::new(dec!(10.50)));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_major(65), Money::from_major(40)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_major(105));

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_tax_keeps_full_precision() {
        let after_discount = Money::new(dec!(97.4));
        let tax = after_discount.calculate_tax(TaxRate::from_bps(1400));
        assert_eq!(tax.amount(), dec!(13.636));
    }

    #[test]
    fn test_discount_portion() {
        let price = Money::from_major(40);
        let discount = price.calculate_discount(DiscountRate::from_bps(600));
        assert_eq!(discount.amount(), dec!(2.4));
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::new(dec!(97.4))).unwrap();
        assert_eq!(json, "\"97.4\"");
    }
}
