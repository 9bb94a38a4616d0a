//! # Ordering Session
//!
//! Interactive order taking over any `BufRead` / `Write` pair.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Choose menu (0 = exit)                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──► Choose item ──► Add-ons until 0 ──► wrap() ──┐                   │
//! │  └──────────────── "Add another item?" = 1 ◄───────┘                   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Choose payment ──► facade.place_order() ──► staff messages + receipt  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  "Want another order?" = 1 ──► back to top, otherwise "Goodbye!"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line that is not a number re-prompts with "Enter a valid number: ".
//! An out-of-range menu or payment choice abandons the current order.
//! End of input ends the session as if 0 had been chosen at the menu.

use std::io::{BufRead, Write};

use bistro_core::{AddOn, AddOnKind, Item, Menu, MenuKind, RestaurantFacade};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::kitchen::KitchenBoard;
use crate::payment::PaymentChoice;

const CHOICE_PROMPT: &str = "Your choice: ";

pub struct Session<R, W> {
    input: R,
    output: W,
    facade: RestaurantFacade,
    board: KitchenBoard,
    config: AppConfig,
    orders_placed: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        facade: RestaurantFacade,
        board: KitchenBoard,
        config: AppConfig,
    ) -> Self {
        Session {
            input,
            output,
            facade,
            board,
            config,
            orders_placed: 0,
        }
    }

    /// Runs until the customer exits or input ends.
    ///
    /// Returns the number of orders that were settled.
    pub fn run(&mut self) -> AppResult<usize> {
        writeln!(self.output, "Welcome to {}!", self.config.restaurant_name)?;

        match self.take_orders() {
            Ok(()) | Err(AppError::InputClosed) => {}
            Err(err) => return Err(err),
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(self.orders_placed)
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn take_orders(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "\nChoose Menu Type:")?;
            for (index, kind) in MenuKind::ALL.iter().enumerate() {
                writeln!(self.output, "{}) {}", index + 1, kind)?;
            }
            writeln!(self.output, "0) Exit")?;
            self.prompt(CHOICE_PROMPT)?;

            let choice = self.read_int()?;
            if choice == 0 {
                return Ok(());
            }
            let kind = match MenuKind::from_choice(choice) {
                Ok(kind) => kind,
                Err(err) => {
                    debug!(%err, "Rejected menu choice");
                    writeln!(self.output, "Invalid menu choice.")?;
                    continue;
                }
            };

            let items = self.choose_items(&kind.create_menu())?;

            writeln!(self.output, "\nChoose Payment Method:")?;
            for (index, method) in PaymentChoice::ALL.iter().enumerate() {
                writeln!(self.output, "{}) {}", index + 1, method.label())?;
            }
            self.prompt(CHOICE_PROMPT)?;

            let payment = match PaymentChoice::from_choice(self.read_int()?) {
                Ok(payment) => payment,
                Err(err) => {
                    debug!(%err, "Rejected payment choice");
                    writeln!(self.output, "Invalid payment choice.")?;
                    continue;
                }
            };

            self.place_order(items, payment)?;

            writeln!(self.output, "\nOrder completed. Want another order? (1=Yes, 0=No)")?;
            self.prompt(CHOICE_PROMPT)?;
            if self.read_int()? != 1 {
                return Ok(());
            }
        }
    }

    /// Collects one or more items, each wrapped with its own add-ons.
    fn choose_items(&mut self, menu: &Menu) -> AppResult<Vec<Item>> {
        let mut chosen = Vec::new();

        loop {
            writeln!(self.output, "\n{}", menu)?;
            self.prompt("\nChoose item number: ")?;

            let base = match menu.select(self.read_int()?) {
                Ok(item) => item.clone(),
                Err(err) => {
                    debug!(%err, "Rejected item choice");
                    writeln!(self.output, "Invalid item choice.")?;
                    continue;
                }
            };

            let add_ons = self.choose_add_ons()?;
            let item = self.facade.apply_add_ons(base, &add_ons);
            debug!(item = item.name(), price = %item.price().amount(), "Item added to order");
            chosen.push(item);

            writeln!(self.output, "\nAdd another item from the same menu?")?;
            writeln!(self.output, "1) Yes")?;
            writeln!(self.output, "0) No")?;
            self.prompt(CHOICE_PROMPT)?;
            if self.read_int()? != 1 {
                return Ok(chosen);
            }
        }
    }

    fn choose_add_ons(&mut self) -> AppResult<Vec<AddOn>> {
        let mut add_ons = Vec::new();

        loop {
            writeln!(self.output, "\nAdd-ons for this item (choose number):")?;
            for (index, kind) in AddOnKind::ALL.iter().enumerate() {
                writeln!(
                    self.output,
                    "{}) {} (+{})",
                    index + 1,
                    kind.label(),
                    kind.price_delta().amount().normalize()
                )?;
            }
            writeln!(self.output, "0) Done")?;
            self.prompt(CHOICE_PROMPT)?;

            let code = self.read_int()?;
            if code == 0 {
                return Ok(add_ons);
            }
            match AddOnKind::from_choice(code) {
                Ok(kind) => {
                    add_ons.push(kind.spec());
                    writeln!(self.output, "Added {}.", kind.label())?;
                }
                Err(err) => {
                    debug!(%err, "Rejected add-on choice");
                    writeln!(self.output, "Invalid add-on choice.")?;
                }
            }
        }
    }

    fn place_order(&mut self, items: Vec<Item>, payment: PaymentChoice) -> AppResult<()> {
        let result = self.facade.place_order(items, payment.into_method());

        // Staff may have acknowledged the order even if payment then failed.
        for message in self.board.drain() {
            writeln!(self.output, "{}", message)?;
        }
        let receipt = result?;

        writeln!(self.output, "\n{}", receipt)?;
        writeln!(self.output, "{}", receipt.payment_line())?;
        if self.config.json_receipt {
            writeln!(self.output, "{}", serde_json::to_string_pretty(&receipt)?)?;
        }

        self.orders_placed += 1;
        info!(
            order_id = %receipt.order_id,
            items = receipt.lines.len(),
            total = %receipt.total().amount(),
            method = %receipt.paid_with,
            "Order settled"
        );
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> AppResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads lines until one parses as an integer.
    fn read_int(&mut self) -> AppResult<i64> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AppError::InputClosed);
            }
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.prompt("Enter a valid number: ")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
