//! # Validation Module
//!
//! Field rules shared by the inventory item constructor and mutators.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP controller                                              │
//! │  ├── Path id must parse as an integer                                  │
//! │  └── Body must be JSON with name + location                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: InventoryItem (THIS MODULE)                                  │
//! │  ├── Non-blank                                                         │
//! │  └── No leading/trailing whitespace                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (name)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is never silently trimmed: `" Shelf 4"` is rejected, not repaired.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Problem reported for empty or whitespace-only input.
pub const BLANK: &str = "must not be blank";

/// Problem reported for input with surrounding whitespace.
pub const UNTRIMMED: &str = "must not have leading or trailing whitespace";

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must not start or end with whitespace
///
/// ## Example
/// ```rust
/// use stockpile_core::validation::validate_text;
///
/// assert!(validate_text("name", "Cool Runnings").is_ok());
/// assert!(validate_text("name", "   ").is_err());
/// assert!(validate_text("name", "Cool Runnings\n").is_err());
/// ```
pub fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, BLANK));
    }

    if trimmed.len() != value.len() {
        return Err(ValidationError::new(field, UNTRIMMED));
    }

    Ok(())
}

/// Validates an item name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name)
}

/// Validates an item location.
pub fn validate_location(location: &str) -> ValidationResult<()> {
    validate_text("location", location)
}

// =============================================================================
// Unit Tests
// =============================================================================
