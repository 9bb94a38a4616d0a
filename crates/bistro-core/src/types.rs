//! # Domain Types
//!
//! Small value types shared across the pricing pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    TaxRate      │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pizza          │   │  bps (u32)      │   │  bps (u32)      │       │
//! │  │  Meat           │   │  1400 = 14%     │   │  1000 = 10%     │       │
//! │  │  Chicken        │   └─────────────────┘   └─────────────────┘       │
//! │  │  Other          │                                                   │
//! │  └─────────────────┘   ┌─────────────────┐                             │
//! │                        │  OrderStatus    │                             │
//! │                        │  ─────────────  │                             │
//! │                        │  Empty          │                             │
//! │                        │  Populated      │                             │
//! │                        │  PaymentSet     │                             │
//! │                        │  Settled        │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Category
// =============================================================================

/// Fixed classification of a menu item. Determines its discount rate.
///
/// A category is chosen when the base item is created and survives any
/// number of add-ons unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pizza,
    Meat,
    Chicken,
    #[default]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Pizza => "Pizza",
            Category::Meat => "Meat",
            Category::Chicken => "Chicken",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1400 bps = 14%. Integer rates keep
/// the configuration exact; the multiplication happens in decimal money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::DEFAULT_TAX_RATE
    }
}

/// Renders "14%" or "8.25%".
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Per-item discount rate in basis points (800 bps = 8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// No discount.
    pub const NONE: DiscountRate = DiscountRate(0);

    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Where an order is in its single checkout.
///
/// ```text
/// Empty ──add_item──► Populated ──set_payment_method──► PaymentSet ──pay──► Settled
///   └──────────────set_payment_method──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Freshly created, nothing added.
    #[default]
    Empty,
    /// At least one item added, no payment method yet.
    Populated,
    /// Payment method chosen, ready to settle.
    PaymentSet,
    /// Bill computed and payment charged.
    Settled,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1400);
        assert_eq!(rate.bps(), 1400);
    }

    #[test]
    fn test_tax_rate_default_is_fourteen_percent() {
        assert_eq!(TaxRate::default(), TaxRate::from_bps(1400));
        assert!(!TaxRate::default().is_zero());
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1400).to_string(), "14%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
    }

    #[test]
    fn test_category_display_and_default() {
        assert_eq!(Category::Chicken.to_string(), "Chicken");
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Empty);
    }

    #[test]
    fn test_discount_rate_none() {
        assert!(DiscountRate::NONE.is_zero());
        assert_eq!(DiscountRate::from_bps(1000).bps(), 1000);
    }
}
