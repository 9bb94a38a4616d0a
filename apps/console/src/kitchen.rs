//! # Kitchen Staff
//!
//! Chef and waiter observers. Each posts its acknowledgement to a shared
//! [`KitchenBoard`] that the session prints once the order is placed.

use std::cell::RefCell;
use std::rc::Rc;

use bistro_core::{CoreResult, KitchenSystem, Order, OrderObserver};
use tracing::debug;

use crate::config::StaffRole;

/// Messages posted by staff for the current order, oldest first.
#[derive(Debug, Clone, Default)]
pub struct KitchenBoard {
    messages: Rc<RefCell<Vec<String>>>,
}

impl KitchenBoard {
    pub fn new() -> Self {
        KitchenBoard::default()
    }

    pub fn post(&self, message: impl Into<String>) {
        self.messages.borrow_mut().push(message.into());
    }

    /// Takes all posted messages, leaving the board empty.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

pub struct Chef {
    board: KitchenBoard,
}

impl Chef {
    pub fn new(board: KitchenBoard) -> Self {
        Chef { board }
    }
}

impl OrderObserver for Chef {
    fn name(&self) -> &str {
        "chef"
    }

    fn update(&self, order: &Order) -> CoreResult<()> {
        debug!(order_id = %order.id(), items = order.item_count(), "Chef notified");
        self.board.post("Chef received order. Preparing food...");
        Ok(())
    }
}

pub struct Waiter {
    board: KitchenBoard,
}

impl Waiter {
    pub fn new(board: KitchenBoard) -> Self {
        Waiter { board }
    }
}

impl OrderObserver for Waiter {
    fn name(&self) -> &str {
        "waiter"
    }

    fn update(&self, order: &Order) -> CoreResult<()> {
        debug!(order_id = %order.id(), "Waiter notified");
        self.board.post("Waiter received order. Will serve soon...");
        Ok(())
    }
}

/// Registers the configured staff, in configuration order.
pub fn build_kitchen(staff: &[StaffRole], board: &KitchenBoard) -> KitchenSystem {
    let mut kitchen = KitchenSystem::new();
    for role in staff {
        let observer: Box<dyn OrderObserver> = match role {
            StaffRole::Chef => Box::new(Chef::new(board.clone())),
            StaffRole::Waiter => Box::new(Waiter::new(board.clone())),
        };
        kitchen.add_observer(observer);
    }
    kitchen
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::menu::nuggets;

    #[test]
    fn test_staff_post_in_registration_order() {
        let board = KitchenBoard::new();
        let kitchen = build_kitchen(&[StaffRole::Waiter, StaffRole::Chef], &board);
        assert_eq!(kitchen.observer_names(), vec!["waiter", "chef"]);

        let mut order = Order::new();
        order.add_item(nuggets());
        kitchen.start_order(&order).unwrap();

        assert_eq!(
            board.drain(),
            vec![
                "Waiter received order. Will serve soon...",
                "Chef received order. Preparing food...",
            ]
        );
        assert!(board.drain().is_empty());
    }

    #[test]
    fn test_no_staff() {
        let board = KitchenBoard::new();
        let kitchen = build_kitchen(&[], &board);
        kitchen.start_order(&Order::new()).unwrap();
        assert_eq!(kitchen.observer_count(), 0);
        assert!(board.drain().is_empty());
    }
}
