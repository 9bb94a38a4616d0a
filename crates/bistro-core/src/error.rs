//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Contract violations and collaborator failures  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bistro-console errors (app crate)                                     │
//! │  └── AppError         - CoreError + console I/O failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the core is transient: there is no network and no I/O, so
//! every error is a broken contract and is propagated immediately.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation was attempted in a state that does not allow it.
    ///
    /// ## When This Occurs
    /// - `Order::pay()` called before a payment method was set
    #[error("Order {order_id} is in an invalid state: {reason}")]
    InvalidState { order_id: String, reason: String },

    /// An add-on could not be built.
    ///
    /// ## When This Occurs
    /// - Unknown add-on code coming from the console
    /// - Custom add-on with a blank label or negative price delta
    #[error("Invalid add-on: {reason}")]
    InvalidAddOnSpec { reason: String },

    /// The payment collaborator refused the charge.
    #[error("Payment by {method} failed: {reason}")]
    PaymentFailed { method: String, reason: String },

    /// A kitchen observer failed while being notified.
    #[error("Kitchen observer {observer} failed: {reason}")]
    NotificationFailed { observer: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before business logic runs, usually for values typed at the
/// console or for catalog data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
