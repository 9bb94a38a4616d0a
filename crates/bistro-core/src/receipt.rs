//! # Bill & Receipt
//!
//! [`Bill`] holds the settlement figures at full precision. [`Receipt`] adds
//! the itemized lines and order metadata and knows how to print itself.
//!
//! ## Rendered Receipt
//! ```text
//! --- Bill ---
//! * Classic Burger : 65.00 EGP
//! * Nuggets : 40.00 EGP
//! Subtotal: 105.00 EGP
//! Discount (per-item): -7.60 EGP
//! Tax (14%): 13.64 EGP
//! Total: 111.04 EGP
//! ```
//!
//! Rounding happens only inside `Display`; the struct fields and the JSON
//! form keep every digit (`"111.036"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Category, TaxRate};

// =============================================================================
// Bill
// =============================================================================

/// Settlement figures for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Sum of line prices.
    pub subtotal: Money,
    /// Sum of per-line discounts.
    pub discount: Money,
    /// `subtotal - discount`.
    pub after_discount: Money,
    pub tax_rate: TaxRate,
    /// `after_discount * tax_rate`.
    pub tax: Money,
    /// `after_discount + tax`; the amount charged.
    pub total: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// One itemized line: the (wrapped) item's name and its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub price: Money,
    pub category: Category,
    /// Discount taken from this line alone.
    pub discount: Money,
}

/// What the customer gets back after settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Lines in insertion order.
    pub lines: Vec<ReceiptLine>,
    pub bill: Bill,
    /// Label of the payment method that was charged.
    pub paid_with: String,
}

impl Receipt {
    /// The amount that was charged.
    pub fn total(&self) -> Money {
        self.bill.total
    }

    /// One-line payment confirmation, e.g. "Paid 82.08 EGP by Cash."
    pub fn payment_line(&self) -> String {
        format!("Paid {} by {}.", self.bill.total, self.paid_with)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Bill ---")?;
        for line in &self.lines {
            writeln!(f, "* {} : {}", line.name, line.price)?;
        }
        writeln!(f, "Subtotal: {}", self.bill.subtotal)?;
        writeln!(f, "Discount (per-item): -{}", self.bill.discount)?;
        writeln!(f, "Tax ({}): {}", self.bill.tax_rate, self.bill.tax)?;
        write!(f, "Total: {}", self.bill.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn burger_and_nuggets() -> Receipt {
        Receipt {
            order_id: Uuid::nil(),
            created_at: Utc::now(),
            lines: vec![
                ReceiptLine {
                    name: "Classic Burger".to_string(),
                    price: Money::from_major(65),
                    category: Category::Meat,
                    discount: Money::new(dec!(5.2)),
                },
                ReceiptLine {
                    name: "Nuggets".to_string(),
                    price: Money::from_major(40),
                    category: Category::Chicken,
                    discount: Money::new(dec!(2.4)),
                },
            ],
            bill: Bill {
                subtotal: Money::from_major(105),
                discount: Money::new(dec!(7.6)),
                after_discount: Money::new(dec!(97.4)),
                tax_rate: TaxRate::from_bps(1400),
                tax: Money::new(dec!(13.636)),
                total: Money::new(dec!(111.036)),
            },
            paid_with: "Cash".to_string(),
        }
    }

    #[test]
    fn test_display_rounds_for_output_only() {
        let receipt = burger_and_nuggets();
        let expected = "--- Bill ---\n\
                        * Classic Burger : 65.00 EGP\n\
                        * Nuggets : 40.00 EGP\n\
                        Subtotal: 105.00 EGP\n\
                        Discount (per-item): -7.60 EGP\n\
                        Tax (14%): 13.64 EGP\n\
                        Total: 111.04 EGP";
        assert_eq!(receipt.to_string(), expected);
        assert_eq!(receipt.total().amount(), dec!(111.036));
    }

    #[test]
    fn test_payment_line() {
        assert_eq!(
            burger_and_nuggets().payment_line(),
            "Paid 111.04 EGP by Cash."
        );
    }

    #[test]
    fn test_json_keeps_full_precision() {
        let json = serde_json::to_value(burger_and_nuggets()).unwrap();
        assert_eq!(json["bill"]["total"], "111.036");
        assert_eq!(json["bill"]["taxRate"], 1400);
        assert_eq!(json["lines"][1]["category"], "chicken");
        assert_eq!(json["paidWith"], "Cash");
    }
}
