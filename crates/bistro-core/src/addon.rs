//! # Add-ons
//!
//! Add-ons transform an item's name and price while leaving its category
//! alone. A chain of add-ons is a left fold over `(suffix, delta)` specs:
//!
//! ```text
//! Italian Pizza, 80.00, Pizza
//!      │  + Extra Cheese   (+10.00)
//!      ▼
//! Italian Pizza + Extra Cheese, 90.00, Pizza
//!      │  + Barbecue Sauce (+7.00)
//!      ▼
//! Italian Pizza + Extra Cheese + Barbecue Sauce, 97.00, Pizza
//! ```
//!
//! Price deltas commute, so the final price does not depend on the order
//! the add-ons were chosen in. Suffixes do not: they appear in the order
//! the add-ons were applied.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;
use crate::validation::{validate_add_on_label, validate_price};

// =============================================================================
// Built-in Add-on Kinds
// =============================================================================

/// The add-ons offered on every menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnKind {
    /// " + Extra Cheese", +10.00
    ExtraCheese,
    /// " + Barbecue Sauce", +7.00
    BarbecueSauce,
}

impl AddOnKind {
    /// All built-in kinds, in the order the console lists them.
    pub const ALL: [AddOnKind; 2] = [AddOnKind::ExtraCheese, AddOnKind::BarbecueSauce];

    /// Human label, e.g. "Extra Cheese".
    pub const fn label(&self) -> &'static str {
        match self {
            AddOnKind::ExtraCheese => "Extra Cheese",
            AddOnKind::BarbecueSauce => "Barbecue Sauce",
        }
    }

    /// Suffix appended to the wrapped item's name.
    pub const fn suffix(&self) -> &'static str {
        match self {
            AddOnKind::ExtraCheese => " + Extra Cheese",
            AddOnKind::BarbecueSauce => " + Barbecue Sauce",
        }
    }

    /// Amount added to the wrapped item's price.
    pub fn price_delta(&self) -> Money {
        match self {
            AddOnKind::ExtraCheese => Money::from_major(10),
            AddOnKind::BarbecueSauce => Money::from_major(7),
        }
    }

    /// The `(suffix, delta)` spec applied by [`wrap`].
    pub fn spec(&self) -> AddOn {
        AddOn {
            suffix: Cow::Borrowed(self.suffix()),
            delta: self.price_delta(),
        }
    }

    /// Maps a console add-on code (1 = Extra Cheese, 2 = Barbecue Sauce).
    ///
    /// ## Errors
    /// `InvalidAddOnSpec` for any other code.
    pub fn from_choice(code: i64) -> CoreResult<AddOnKind> {
        match code {
            1 => Ok(AddOnKind::ExtraCheese),
            2 => Ok(AddOnKind::BarbecueSauce),
            other => Err(CoreError::InvalidAddOnSpec {
                reason: format!("unknown add-on code {}", other),
            }),
        }
    }
}

impl From<AddOnKind> for AddOn {
    fn from(kind: AddOnKind) -> Self {
        kind.spec()
    }
}

// =============================================================================
// Add-on Spec
// =============================================================================

/// One name/price transformation: append `suffix`, add `delta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    suffix: Cow<'static, str>,
    delta: Money,
}

impl AddOn {
    /// Builds an add-on that is not one of the built-in kinds.
    ///
    /// The suffix becomes `" + {label}"`.
    ///
    /// ## Errors
    /// `InvalidAddOnSpec` when the label is blank or too long, or the delta
    /// is negative.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::addon::AddOn;
    /// use bistro_core::Money;
    ///
    /// let olives = AddOn::custom("Olives", Money::from_major(5)).unwrap();
    /// assert_eq!(olives.suffix(), " + Olives");
    /// assert!(AddOn::custom("Olives", Money::from_major(-5)).is_err());
    /// ```
    pub fn custom(label: &str, delta: Money) -> CoreResult<AddOn> {
        validate_add_on_label(label)
            .and_then(|_| validate_price(delta))
            .map_err(|e| CoreError::InvalidAddOnSpec {
                reason: e.to_string(),
            })?;

        Ok(AddOn {
            suffix: Cow::Owned(format!(" + {}", label.trim())),
            delta,
        })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn delta(&self) -> Money {
        self.delta
    }

    /// Applies this add-on to one item, producing a new item.
    pub fn apply(&self, item: Item) -> Item {
        let category = item.category();
        let price = item.price() + self.delta;
        let mut name = item.name().to_string();
        name.push_str(&self.suffix);
        Item::new(name, price, category)
    }
}

// =============================================================================
// Wrapping
// =============================================================================

/// Applies `add_ons` to `item` in order.
///
/// An empty slice returns the item unchanged.
///
/// ## Example
/// ```rust
/// use bistro_core::addon::{wrap, AddOnKind};
/// use bistro_core::{Category, Item, Money};
///
/// let burger = Item::new("Classic Burger", Money::from_major(65), Category::Meat);
/// let wrapped = wrap(burger.clone(), &[AddOnKind::BarbecueSauce.spec()]);
///
/// assert_eq!(wrapped.name(), "Classic Burger + Barbecue Sauce");
/// assert_eq!(wrapped.price(), Money::from_major(72));
/// assert_eq!(wrap(burger.clone(), &[]), burger);
/// ```
pub fn wrap(item: Item, add_ons: &[AddOn]) -> Item {
    add_ons.iter().fold(item, |acc, add_on| add_on.apply(acc))
}

// =============================================================================
// Unit Tests
// =============================================================================
