//! # Order
//!
//! An order collects finalized (already wrapped) items for one checkout,
//! remembers the chosen payment method, and settles itself exactly once.
//!
//! ## Lifecycle
//! ```text
//!  Empty ──add_item──► Populated ──set_payment_method──► PaymentSet ──pay──► Settled
//!    │                                                       ▲
//!    └──────────────────set_payment_method───────────────────┘
//!
//!  pay() before a payment method is set → CoreError::InvalidState
//! ```
//!
//! ## Settlement
//! ```text
//! for each item, in insertion order:
//!     subtotal += price
//!     discount += price × rate(category)      (own price, not running total)
//! after_discount = subtotal − discount
//! tax            = after_discount × 14%
//! total          = after_discount + tax       ──► payment(total)
//! ```
//! No step rounds. Rounding to cents happens when the receipt is printed.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::discount::DiscountResolver;
use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;
use crate::payment::PaymentMethod;
use crate::receipt::{Bill, Receipt, ReceiptLine};
use crate::types::{OrderStatus, TaxRate};
use crate::DEFAULT_TAX_RATE;

/// A single checkout.
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<Item>,
    payment_method: Option<Box<dyn PaymentMethod>>,
    tax_rate: TaxRate,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty order taxed at 14%.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
            payment_method: None,
            tax_rate: DEFAULT_TAX_RATE,
            status: OrderStatus::Empty,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Label of the selected payment method, if any.
    pub fn payment_label(&self) -> Option<&str> {
        self.payment_method.as_ref().map(|p| p.label())
    }

    /// Appends a finalized item.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
        if self.status == OrderStatus::Empty {
            self.status = OrderStatus::Populated;
        }
    }

    /// Selects how the order will be paid.
    pub fn set_payment_method(&mut self, payment_method: Box<dyn PaymentMethod>) {
        self.payment_method = Some(payment_method);
        if self.status != OrderStatus::Settled {
            self.status = OrderStatus::PaymentSet;
        }
    }

    /// Computes the settlement figures without charging anything.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::menu::{classic_burger, nuggets};
    /// use bistro_core::{Money, Order};
    /// use rust_decimal::Decimal;
    ///
    /// let mut order = Order::new();
    /// order.add_item(classic_burger());
    /// order.add_item(nuggets());
    ///
    /// let bill = order.bill();
    /// assert_eq!(bill.subtotal, Money::from_major(105));
    /// assert_eq!(bill.discount, Money::from_cents(760));
    /// assert_eq!(bill.total, Money::new(Decimal::new(111_036, 3)));
    /// ```
    pub fn bill(&self) -> Bill {
        let mut subtotal = Money::zero();
        let mut discount = Money::zero();

        for item in &self.items {
            let price = item.price();
            subtotal += price;
            discount += DiscountResolver::for_item(item).apply_discount(price);
        }

        let after_discount = subtotal - discount;
        let tax = after_discount.calculate_tax(self.tax_rate);

        Bill {
            subtotal,
            discount,
            after_discount,
            tax_rate: self.tax_rate,
            tax,
            total: after_discount + tax,
        }
    }

    /// Settles the order: computes the bill, builds the receipt and charges
    /// the payment method with the total.
    ///
    /// An order with no items is still charged, with an amount of zero.
    /// Calling `pay()` again charges again; settlement is meant to happen
    /// once.
    ///
    /// ## Errors
    /// - `InvalidState` if no payment method was set
    /// - whatever the payment method returns; the order is then not settled
    pub fn pay(&mut self) -> CoreResult<Receipt> {
        let bill = self.bill();
        let lines = self
            .items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name().to_string(),
                price: item.price(),
                category: item.category(),
                discount: DiscountResolver::for_item(item).apply_discount(item.price()),
            })
            .collect();

        let Some(payment_method) = self.payment_method.as_mut() else {
            return Err(CoreError::InvalidState {
                order_id: self.id.to_string(),
                reason: "no payment method selected".to_string(),
            });
        };

        let receipt = Receipt {
            order_id: self.id,
            created_at: self.created_at,
            lines,
            bill,
            paid_with: payment_method.label().to_string(),
        };

        payment_method.payment(bill.total)?;
        self.status = OrderStatus::Settled;

        Ok(receipt)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("items", &self.items)
            .field("payment_method", &self.payment_label())
            .field("tax_rate", &self.tax_rate)
            .field("status", &self.status)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::{wrap, AddOnKind};
    use crate::menu::{classic_burger, italian_pizza, nuggets};
    use crate::types::Category;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every charged amount.
    struct RecordingPayment {
        charges: Rc<RefCell<Vec<Money>>>,
    }

    impl PaymentMethod for RecordingPayment {
        fn label(&self) -> &str {
            "Test"
        }

        fn payment(&mut self, amount: Money) -> CoreResult<()> {
            self.charges.borrow_mut().push(amount);
            Ok(())
        }
    }

    struct DecliningPayment;

    impl PaymentMethod for DecliningPayment {
        fn label(&self) -> &str {
            "Declined Card"
        }

        fn payment(&mut self, _amount: Money) -> CoreResult<()> {
            Err(CoreError::PaymentFailed {
                method: "Declined Card".to_string(),
                reason: "insufficient funds".to_string(),
            })
        }
    }

    fn order_with(items: Vec<Item>) -> (Order, Rc<RefCell<Vec<Money>>>) {
        let charges = Rc::new(RefCell::new(Vec::new()));
        let mut order = Order::new();
        for item in items {
            order.add_item(item);
        }
        order.set_payment_method(Box::new(RecordingPayment {
            charges: Rc::clone(&charges),
        }));
        (order, charges)
    }

    #[test]
    fn test_single_pizza() {
        let (mut order, charges) = order_with(vec![italian_pizza()]);

        let receipt = order.pay().unwrap();

        assert_eq!(receipt.bill.subtotal.amount(), dec!(80));
        assert_eq!(receipt.bill.discount.amount(), dec!(8.0));
        assert_eq!(receipt.bill.after_discount.amount(), dec!(72));
        assert_eq!(receipt.bill.tax.amount(), dec!(10.08));
        assert_eq!(receipt.bill.total.amount(), dec!(82.08));
        assert_eq!(*charges.borrow(), vec![Money::new(dec!(82.08))]);
    }

    #[test]
    fn test_burger_and_nuggets() {
        let (mut order, charges) = order_with(vec![classic_burger(), nuggets()]);

        let receipt = order.pay().unwrap();

        assert_eq!(receipt.bill.subtotal.amount(), dec!(105));
        assert_eq!(receipt.bill.discount.amount(), dec!(7.6));
        assert_eq!(receipt.bill.after_discount.amount(), dec!(97.4));
        assert_eq!(receipt.bill.tax.amount(), dec!(13.636));
        assert_eq!(receipt.bill.total.amount(), dec!(111.036));
        assert_eq!(charges.borrow()[0].amount(), dec!(111.036));
    }

    #[test]
    fn test_wrapped_pizza_discounted_on_wrapped_price() {
        let pizza = wrap(
            italian_pizza(),
            &[AddOnKind::ExtraCheese.spec(), AddOnKind::BarbecueSauce.spec()],
        );
        let (mut order, _) = order_with(vec![pizza]);

        let receipt = order.pay().unwrap();

        assert_eq!(receipt.lines[0].name, "Italian Pizza + Extra Cheese + Barbecue Sauce");
        assert_eq!(receipt.lines[0].category, Category::Pizza);
        assert_eq!(receipt.lines[0].discount.amount(), dec!(9.7));
        assert_eq!(receipt.bill.discount.amount(), dec!(9.7));
        assert_eq!(receipt.bill.total.amount(), dec!(99.522));
    }

    #[test]
    fn test_empty_order_is_charged_zero() {
        let (mut order, charges) = order_with(Vec::new());

        let receipt = order.pay().unwrap();

        assert!(receipt.lines.is_empty());
        assert!(receipt.bill.subtotal.is_zero());
        assert!(receipt.bill.discount.is_zero());
        assert!(receipt.bill.tax.is_zero());
        assert!(receipt.bill.total.is_zero());
        assert_eq!(charges.borrow().len(), 1);
        assert!(charges.borrow()[0].is_zero());
    }

    #[test]
    fn test_pay_without_payment_method_is_invalid_state() {
        let mut order = Order::new();
        order.add_item(nuggets());

        let err = order.pay().unwrap_err();

        assert!(matches!(err, CoreError::InvalidState { .. }));
        assert_eq!(order.status(), OrderStatus::Populated);
    }

    #[test]
    fn test_failed_payment_leaves_order_unsettled() {
        let mut order = Order::new();
        order.add_item(nuggets());
        order.set_payment_method(Box::new(DecliningPayment));

        let err = order.pay().unwrap_err();

        assert!(matches!(err, CoreError::PaymentFailed { .. }));
        assert_eq!(order.status(), OrderStatus::PaymentSet);
    }

    #[test]
    fn test_status_transitions() {
        let mut order = Order::new();
        assert_eq!(order.status(), OrderStatus::Empty);

        order.add_item(nuggets());
        assert_eq!(order.status(), OrderStatus::Populated);

        order.set_payment_method(Box::new(RecordingPayment {
            charges: Rc::new(RefCell::new(Vec::new())),
        }));
        assert_eq!(order.status(), OrderStatus::PaymentSet);
        assert_eq!(order.payment_label(), Some("Test"));

        order.pay().unwrap();
        assert_eq!(order.status(), OrderStatus::Settled);
    }

    #[test]
    fn test_receipt_lines_follow_insertion_order() {
        let (mut order, _) = order_with(vec![nuggets(), italian_pizza(), classic_burger()]);

        let receipt = order.pay().unwrap();
        let names: Vec<&str> = receipt.lines.iter().map(|l| l.name.as_str()).collect();

        assert_eq!(names, vec!["Nuggets", "Italian Pizza", "Classic Burger"]);
        assert_eq!(receipt.order_id, order.id());
        assert_eq!(receipt.paid_with, "Test");
    }

    #[test]
    fn test_bill_does_not_charge() {
        let (order, charges) = order_with(vec![italian_pizza()]);
        let _ = order.bill();
        assert!(charges.borrow().is_empty());
    }

    #[test]
    fn test_bill_with_most_expensive_items() {
        let gold = Item::try_new("Gold Pizza", Money::from_major(crate::MAX_ITEM_PRICE), Category::Pizza)
            .unwrap();
        let (order, _) = order_with(vec![gold.clone(), gold]);

        let bill = order.bill();
        assert_eq!(bill.subtotal, Money::from_major(2_000_000));
        assert_eq!(bill.total.amount(), dec!(2052000));
    }
}
