//! # Payment Seam
//!
//! The core never moves money itself. Settlement hands the final total to a
//! [`PaymentMethod`] supplied by the caller; the console app provides Cash,
//! Mobile Wallet and Credit Card implementations.

use crate::error::CoreResult;
use crate::money::Money;

/// Executes a payment for a settled order.
///
/// ## Contract
/// - Called exactly once per settlement, with the unrounded total
/// - Must accept an amount of zero (empty orders are still charged)
/// - An `Err` is propagated unchanged and the order stays unsettled
pub trait PaymentMethod {
    /// Name printed on the receipt, e.g. "Cash".
    fn label(&self) -> &str;

    /// Charges `amount`.
    fn payment(&mut self, amount: Money) -> CoreResult<()>;
}
