//! # Validation Module
//!
//! Input validation utilities for Bistro.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (bistro-console)                                     │
//! │  ├── Non-numeric input → re-prompt                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Menu / item / add-on / payment choices in range                   │
//! │  └── Item names and prices well formed                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing core                                                 │
//! │  └── Assumes validated input, never fails on data                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_ITEM_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Italian Pizza").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name)
}

/// Validates the label of a custom add-on ("Extra Olives").
pub fn validate_add_on_label(label: &str) -> ValidationResult<()> {
    validate_label("add-on label", label)
}

fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or price delta.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items, free add-ons)
/// - At most `MAX_ITEM_PRICE`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > Money::from_major(MAX_ITEM_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates a one-based numeric choice typed at the console.
///
/// ## Rules
/// - `min <= choice <= max`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Choose item number: 3                                                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_choice("item choice", 3, 1, 2) ← THIS FUNCTION               │
/// │       │                                                                 │
/// │       ├── out of range → "item choice must be between 1 and 2"         │
/// │       │                                                                 │
/// │       └── OK → menu.select(3)                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_choice(field: &str, choice: i64, min: i64, max: i64) -> ValidationResult<()> {
    if choice < min || choice > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
