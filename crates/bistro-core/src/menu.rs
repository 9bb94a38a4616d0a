//! # Menus
//!
//! The built-in catalog and the factory that assembles a menu per kind.
//!
//! ```text
//! MenuKind::Vegetarian     ──create_menu()──►  Italian Pizza, Eastern Pizza
//! MenuKind::NonVegetarian  ──create_menu()──►  Classic Burger, Nuggets
//! MenuKind::Kids           ──create_menu()──►  Nuggets, Eastern Pizza
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::item::Item;
use crate::money::Money;
use crate::types::Category;
use crate::validation::validate_choice;

// =============================================================================
// Catalog Items
// =============================================================================

pub fn italian_pizza() -> Item {
    Item::new("Italian Pizza", Money::from_major(80), Category::Pizza)
}

pub fn eastern_pizza() -> Item {
    Item::new("Eastern Pizza", Money::from_major(75), Category::Pizza)
}

pub fn classic_burger() -> Item {
    Item::new("Classic Burger", Money::from_major(65), Category::Meat)
}

pub fn nuggets() -> Item {
    Item::new("Nuggets", Money::from_major(40), Category::Chicken)
}

// =============================================================================
// Menu Kind (factory)
// =============================================================================

/// Which menu the customer is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    Vegetarian,
    NonVegetarian,
    Kids,
}

impl MenuKind {
    /// All kinds, in the order the console lists them (choices 1..=3).
    pub const ALL: [MenuKind; 3] = [MenuKind::Vegetarian, MenuKind::NonVegetarian, MenuKind::Kids];

    pub const fn title(&self) -> &'static str {
        match self {
            MenuKind::Vegetarian => "Vegetarian Menu",
            MenuKind::NonVegetarian => "Non-Vegetarian Menu",
            MenuKind::Kids => "Kids Menu",
        }
    }

    /// Maps a one-based console choice to a menu kind.
    ///
    /// ## Errors
    /// `Validation(OutOfRange)` outside `1..=3`.
    pub fn from_choice(choice: i64) -> CoreResult<MenuKind> {
        validate_choice("menu choice", choice, 1, MenuKind::ALL.len() as i64)?;
        Ok(MenuKind::ALL[(choice - 1) as usize])
    }

    /// Builds the menu for this kind.
    pub fn create_menu(&self) -> Menu {
        let items = match self {
            MenuKind::Vegetarian => vec![italian_pizza(), eastern_pizza()],
            MenuKind::NonVegetarian => vec![classic_burger(), nuggets()],
            MenuKind::Kids => vec![nuggets(), eastern_pizza()],
        };
        Menu { kind: *self, items }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Menu
// =============================================================================

/// An ordered list of base items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    kind: MenuKind,
    items: Vec<Item>,
}

impl Menu {
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item for a one-based console choice.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::MenuKind;
    ///
    /// let menu = MenuKind::NonVegetarian.create_menu();
    /// assert_eq!(menu.select(2).unwrap().name(), "Nuggets");
    /// assert!(menu.select(3).is_err());
    /// ```
    pub fn select(&self, choice: i64) -> CoreResult<&Item> {
        validate_choice("item choice", choice, 1, self.items.len() as i64)?;
        Ok(&self.items[(choice - 1) as usize])
    }
}

/// Numbered listing, as shown at the console.
impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=== {} ===", self.kind.title())?;
        for (index, item) in self.items.iter().enumerate() {
            write!(f, "\n{}) {} : {}", index + 1, item.name(), item.price())?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn names(menu: &Menu) -> Vec<&str> {
        menu.items().iter().map(|i| i.name()).collect()
    }

    #[test]
    fn test_menu_contents() {
        assert_eq!(
            names(&MenuKind::Vegetarian.create_menu()),
            vec!["Italian Pizza", "Eastern Pizza"]
        );
        assert_eq!(
            names(&MenuKind::NonVegetarian.create_menu()),
            vec!["Classic Burger", "Nuggets"]
        );
        assert_eq!(
            names(&MenuKind::Kids.create_menu()),
            vec!["Nuggets", "Eastern Pizza"]
        );
    }

    #[test]
    fn test_catalog_prices_and_categories() {
        assert_eq!(italian_pizza().price(), Money::from_major(80));
        assert_eq!(eastern_pizza().price(), Money::from_major(75));
        assert_eq!(classic_burger().category(), Category::Meat);
        assert_eq!(nuggets().category(), Category::Chicken);
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(MenuKind::from_choice(1).unwrap(), MenuKind::Vegetarian);
        assert_eq!(MenuKind::from_choice(3).unwrap(), MenuKind::Kids);
        assert!(matches!(
            MenuKind::from_choice(0),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(MenuKind::from_choice(4).is_err());
    }

    #[test]
    fn test_select_is_one_based() {
        let menu = MenuKind::Kids.create_menu();
        assert_eq!(menu.select(1).unwrap(), &nuggets());
        assert!(menu.select(0).is_err());
        assert!(menu.select(-1).is_err());
    }

    #[test]
    fn test_display_listing() {
        let menu = MenuKind::Vegetarian.create_menu();
        assert_eq!(
            menu.to_string(),
            "=== Vegetarian Menu ===\n1) Italian Pizza : 80.00 EGP\n2) Eastern Pizza : 75.00 EGP"
        );
    }
}
