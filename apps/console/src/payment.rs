//! # Payment Methods
//!
//! Console implementations of [`PaymentMethod`]. None of them talk to a real
//! processor; a charge is accepted and logged.
//!
//! ```text
//! Payment prompt ──► PaymentChoice::from_choice(n) ──► Box<dyn PaymentMethod>
//!                                                           │
//!                                   Order::pay() ──► payment(total)
//! ```

use bistro_core::validation::validate_choice;
use bistro_core::{CoreError, CoreResult, Money, PaymentMethod};
use tracing::info;

/// Accepts a charge for any non-negative amount.
fn accept(method: &str, amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(CoreError::PaymentFailed {
            method: method.to_string(),
            reason: format!("cannot charge a negative amount ({amount})"),
        });
    }
    info!(method, amount = %amount.amount(), "Payment accepted");
    Ok(())
}

#[derive(Debug, Default)]
pub struct CashPayment;

impl PaymentMethod for CashPayment {
    fn label(&self) -> &str {
        "Cash"
    }

    fn payment(&mut self, amount: Money) -> CoreResult<()> {
        accept(self.label(), amount)
    }
}

#[derive(Debug, Default)]
pub struct MobileWalletPayment;

impl PaymentMethod for MobileWalletPayment {
    fn label(&self) -> &str {
        "Mobile Wallet"
    }

    fn payment(&mut self, amount: Money) -> CoreResult<()> {
        accept(self.label(), amount)
    }
}

#[derive(Debug, Default)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &str {
        "Credit Card"
    }

    fn payment(&mut self, amount: Money) -> CoreResult<()> {
        accept(self.label(), amount)
    }
}

/// The payment options offered at checkout, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Cash,
    MobileWallet,
    CreditCard,
}

impl PaymentChoice {
    pub const ALL: [PaymentChoice; 3] = [
        PaymentChoice::Cash,
        PaymentChoice::MobileWallet,
        PaymentChoice::CreditCard,
    ];

    /// Maps the prompt's one-based number to a choice.
    pub fn from_choice(choice: i64) -> CoreResult<Self> {
        validate_choice("payment choice", choice, 1, Self::ALL.len() as i64)?;
        Ok(Self::ALL[(choice - 1) as usize])
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentChoice::Cash => "Cash",
            PaymentChoice::MobileWallet => "Mobile Wallet",
            PaymentChoice::CreditCard => "Credit Card",
        }
    }

    pub fn into_method(self) -> Box<dyn PaymentMethod> {
        match self {
            PaymentChoice::Cash => Box::new(CashPayment),
            PaymentChoice::MobileWallet => Box::new(MobileWalletPayment),
            PaymentChoice::CreditCard => Box::new(CreditCardPayment),
        }
    }
}
