//! # Restaurant Facade
//!
//! One call from chosen items to a settled receipt.
//!
//! ## Checkout Sequence
//! ```text
//! place_order(items, payment)
//!      │
//!      ├── Order::new()
//!      ├── add_item(..) for each item, in order
//!      ├── set_payment_method(payment)
//!      ├── kitchen.start_order(&order)     ◄── notify BEFORE pricing
//!      └── order.pay()                     ◄── bill + charge
//!              │
//!              ▼
//!           Receipt
//! ```
//!
//! No retries. A kitchen or payment failure is returned as-is.

use crate::addon::{wrap, AddOn};
use crate::error::CoreResult;
use crate::item::Item;
use crate::kitchen::KitchenSystem;
use crate::order::Order;
use crate::payment::PaymentMethod;
use crate::receipt::Receipt;

/// Coordinates ordering, kitchen notification and payment.
#[derive(Debug, Default)]
pub struct RestaurantFacade {
    kitchen: KitchenSystem,
}

impl RestaurantFacade {
    pub fn new(kitchen: KitchenSystem) -> Self {
        RestaurantFacade { kitchen }
    }

    pub fn kitchen(&self) -> &KitchenSystem {
        &self.kitchen
    }

    /// Wraps a base item with add-ons in the order given.
    pub fn apply_add_ons(&self, item: Item, add_ons: &[AddOn]) -> Item {
        wrap(item, add_ons)
    }

    /// Builds, announces and settles one order.
    ///
    /// ## Errors
    /// - the first failing kitchen observer's error (payment is not attempted)
    /// - the payment method's error
    pub fn place_order<I>(&self, items: I, payment: Box<dyn PaymentMethod>) -> CoreResult<Receipt>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut order = Order::new();
        for item in items {
            order.add_item(item);
        }
        order.set_payment_method(payment);

        self.kitchen.start_order(&order)?;
        order.pay()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
