//! # Kitchen Notification
//!
//! Staff who need to know an order has started register once at startup.
//! When the facade starts an order, every observer is told synchronously,
//! in registration order.
//!
//! ```text
//! KitchenSystem::start_order(&order)
//!      │
//!      ├──► Chef.update(&order)    "Preparing food..."
//!      │
//!      └──► Waiter.update(&order)  "Will serve soon..."
//! ```
//!
//! There is no per-observer isolation: the first failing observer aborts the
//! notification and its error reaches the caller.

use std::fmt;

use crate::error::CoreResult;
use crate::order::Order;

/// Someone interested in orders as they start.
pub trait OrderObserver {
    /// Used to identify the observer for removal and in error reports.
    fn name(&self) -> &str;

    /// Called once per started order, before it is priced.
    fn update(&self, order: &Order) -> CoreResult<()>;
}

/// Ordered registry of kitchen observers.
#[derive(Default)]
pub struct KitchenSystem {
    observers: Vec<Box<dyn OrderObserver>>,
}

impl KitchenSystem {
    pub fn new() -> Self {
        KitchenSystem::default()
    }

    /// Registers an observer at the end of the notification order.
    pub fn add_observer(&mut self, observer: Box<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    /// Removes the first observer with the given name.
    ///
    /// Returns `false` if no observer matched.
    pub fn remove_observer(&mut self, name: &str) -> bool {
        match self.observers.iter().position(|o| o.name() == name) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Names in notification order.
    pub fn observer_names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Announces a new order to every observer.
    ///
    /// ## Errors
    /// The first observer error, unchanged. Later observers are not called.
    pub fn start_order(&self, order: &Order) -> CoreResult<()> {
        for observer in &self.observers {
            observer.update(order)?;
        }
        Ok(())
    }
}

impl fmt::Debug for KitchenSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KitchenSystem")
            .field("observers", &self.observer_names())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
