//! # bistro-core: Pure Ordering & Pricing Logic for Bistro
//!
//! This crate is the **heart** of Bistro. It turns chosen menu items into a
//! settled bill: add-ons are folded onto base items, every line resolves a
//! discount from its category, and the order derives subtotal, discount,
//! tax and total before charging a payment method.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Bistro Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bistro-console (apps/console)                   │   │
//! │  │    Menu prompt ──► Add-on prompt ──► Payment prompt ──► Bill   │   │
//! │  │    Cash / Wallet / Card          Chef / Waiter                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PaymentMethod, OrderObserver          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌─────────────────┐  │   │
//! │  │   │  item   │  │  addon  │  │ discount │  │ order / receipt │  │   │
//! │  │   │  menu   │  │  wrap() │  │ resolver │  │ facade, kitchen │  │   │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └─────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • EXACT DECIMAL MONEY                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, tax and discount rates, order status
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`item`] - The immutable menu item record
//! - [`addon`] - Add-on specs and the `wrap` fold
//! - [`discount`] - Category to discount rate resolution
//! - [`order`] - Order state machine and settlement
//! - [`receipt`] - Bill figures and receipt rendering
//! - [`payment`] / [`kitchen`] - Collaborator traits
//! - [`facade`] - One-call checkout orchestration
//! - [`menu`] - Built-in catalogs and the menu factory
//! - [`error`] / [`validation`] - Domain errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::addon::{wrap, AddOnKind};
//! use bistro_core::menu::italian_pizza;
//! use bistro_core::Category;
//!
//! let pizza = wrap(
//!     italian_pizza(),
//!     &[AddOnKind::ExtraCheese.spec(), AddOnKind::BarbecueSauce.spec()],
//! );
//!
//! assert_eq!(pizza.name(), "Italian Pizza + Extra Cheese + Barbecue Sauce");
//! assert_eq!(pizza.price().to_string(), "97.00 EGP");
//! assert_eq!(pizza.category(), Category::Pizza);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod addon;
pub mod discount;
pub mod error;
pub mod facade;
pub mod item;
pub mod kitchen;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use addon::{wrap, AddOn, AddOnKind};
pub use discount::DiscountResolver;
pub use error::{CoreError, CoreResult, ValidationError};
pub use facade::RestaurantFacade;
pub use item::Item;
pub use kitchen::{KitchenSystem, OrderObserver};
pub use menu::{Menu, MenuKind};
pub use money::Money;
pub use order::Order;
pub use payment::PaymentMethod;
pub use receipt::{Bill, Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency label printed next to every amount.
///
/// The restaurant bills in a single currency; there is no conversion.
pub const CURRENCY_CODE: &str = "EGP";

/// Sales tax applied to every order, in basis points (1400 = 14%).
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(1400);

/// Maximum length of an item name, including add-on suffixes.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Highest price or add-on delta accepted by validation, in whole units.
///
/// Keeps order sums far below the range of `Decimal`.
pub const MAX_ITEM_PRICE: i64 = 1_000_000;
