//! # Console Error Type
//!
//! Unified error type for the console application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bistro                                 │
//! │                                                                         │
//! │  Session step                                                           │
//! │     │                                                                   │
//! │     ├── bad number typed ───────► re-prompt (never an error)           │
//! │     ├── choice out of range ────► message + re-prompt                  │
//! │     ├── stdin closed ───────────► AppError::InputClosed → "Goodbye!"   │
//! │     ├── kitchen/payment failure ► AppError::Core ──┐                   │
//! │     └── stdout broken ──────────► AppError::Io ────┤                   │
//! │                                                     ▼                   │
//! │                                       main(): log + exit code 1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bistro_core::CoreError;
use thiserror::Error;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Business logic failure (kitchen notification or payment).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The receipt could not be rendered as JSON.
    #[error("Receipt serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stdin reached end of file while waiting for a choice.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Machine-readable code for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::InvalidState { .. }) => "INVALID_STATE",
            AppError::Core(CoreError::InvalidAddOnSpec { .. }) => "INVALID_ADD_ON",
            AppError::Core(CoreError::PaymentFailed { .. }) => "PAYMENT_ERROR",
            AppError::Core(CoreError::NotificationFailed { .. }) => "KITCHEN_ERROR",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::InputClosed => "INPUT_CLOSED",
        }
    }
}

/// Convenience type alias for console results.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through_message() {
        let err: AppError = CoreError::PaymentFailed {
            method: "Credit Card".to_string(),
            reason: "declined".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Payment by Credit Card failed: declined");
        assert_eq!(err.code(), "PAYMENT_ERROR");
    }

    #[test]
    fn test_io_error_code() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(AppError::InputClosed.code(), "INPUT_CLOSED");
    }
}
