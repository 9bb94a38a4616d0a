//! # Discount Resolver
//!
//! Every order line gets a discount chosen by its category alone:
//!
//! | Category | Rate |
//! |----------|------|
//! | Pizza    | 10%  |
//! | Meat     | 8%   |
//! | Chicken  | 6%   |
//! | Other    | 0%   |
//!
//! The discount is taken from the line's own price, never from a running
//! subtotal.

use crate::item::Item;
use crate::money::Money;
use crate::types::{Category, DiscountRate};

/// Pure `Category → DiscountRate` resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountResolver {
    rate: DiscountRate,
}

impl DiscountResolver {
    /// Resolves the discount for a category.
    pub const fn for_category(category: Category) -> Self {
        DiscountResolver {
            rate: rate_for(category),
        }
    }

    /// Resolves the discount for an item's category.
    pub fn for_item(item: &Item) -> Self {
        DiscountResolver::for_category(item.category())
    }

    pub const fn rate(&self) -> DiscountRate {
        self.rate
    }

    /// Discount amount for one line: `price * rate`, unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::discount::DiscountResolver;
    /// use bistro_core::{Category, Money};
    ///
    /// let meat = DiscountResolver::for_category(Category::Meat);
    /// assert_eq!(meat.apply_discount(Money::from_major(65)), Money::from_cents(520));
    /// ```
    pub fn apply_discount(&self, price: Money) -> Money {
        price.calculate_discount(self.rate)
    }
}

/// The discount rate table.
pub const fn rate_for(category: Category) -> DiscountRate {
    match category {
        Category::Pizza => DiscountRate::from_bps(1000),
        Category::Meat => DiscountRate::from_bps(800),
        Category::Chicken => DiscountRate::from_bps(600),
        Category::Other => DiscountRate::NONE,
    }
}
