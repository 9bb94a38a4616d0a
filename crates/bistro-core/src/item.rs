//! # Item
//!
//! The immutable product record that flows through the whole pipeline:
//! catalogs hand out base items, add-ons produce new items from them, and
//! orders price them.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_item_name, validate_price};

/// A named, priced, categorized product.
///
/// ## Invariants
/// - `name` and `price` never change after construction; add-ons build a
///   new `Item` instead of mutating this one
/// - `category` is carried over verbatim by every add-on
/// - `price` is non-negative when built through [`Item::try_new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
    category: Category,
}

impl Item {
    /// Creates an item without validation.
    ///
    /// Used for the built-in catalog, whose data is known to be valid.
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        Item {
            name: name.into(),
            price,
            category,
        }
    }

    /// Creates an item after checking the name and price.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{Category, Item, Money};
    ///
    /// assert!(Item::try_new("Soup", Money::from_major(20), Category::Other).is_ok());
    /// assert!(Item::try_new("", Money::from_major(20), Category::Other).is_err());
    /// assert!(Item::try_new("Soup", Money::from_cents(-1), Category::Other).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, price: Money, category: Category) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;
        Ok(Item::new(name, price, category))
    }

    /// Display label, including any add-on suffixes.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price including any add-on deltas.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Category used for discount lookup.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::MAX_ITEM_PRICE;

    #[test]
    fn test_accessors() {
        let item = Item::new("Nuggets", Money::from_major(40), Category::Chicken);
        assert_eq!(item.name(), "Nuggets");
        assert_eq!(item.price(), Money::from_major(40));
        assert_eq!(item.category(), Category::Chicken);
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        assert!(Item::try_new("   ", Money::from_major(1), Category::Other).is_err());
        assert!(Item::try_new("Tea", Money::from_cents(-50), Category::Other).is_err());

        let free = Item::try_new("Water", Money::zero(), Category::Other).unwrap();
        assert!(free.price().is_zero());
    }

    #[test]
    fn test_try_new_rejects_unbounded_price() {
        let err = Item::try_new("Gold Pizza", Money::new(rust_decimal::Decimal::MAX), Category::Pizza)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { max: MAX_ITEM_PRICE, .. })
        ));
    }
}
