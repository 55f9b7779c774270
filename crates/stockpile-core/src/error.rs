//! # Error Taxonomy
//!
//! The closed set of error kinds every layer of Stockpile speaks.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Propagation                               │
//! │                                                                         │
//! │  sqlx::Error (raw driver error)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  classify() in stockpile-db ← the ONLY place message text is read      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError (this module)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryService ← wraps with stage context ("... - repository error")│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in stockpile-api) ← kind() → HTTP status                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Context wrappers never hide the kind: [`InventoryError::kind`] looks
//!    through every [`InventoryError::Context`] layer
//! 3. Unrecognised errors keep their original message and source

use thiserror::Error;

use crate::item::{Availability, ItemId};

/// Boxed error used to carry raw driver errors through the taxonomy.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Validation Error
// =============================================================================

/// Input failed a domain rule.
///
/// `field` names the offending input (`"name"`, `"location"`, `"id"`, ...)
/// and `problem` says what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {problem}")]
pub struct ValidationError {
    pub field: String,
    pub problem: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Flat projection of [`InventoryError`] used by callers that switch on the
/// kind of failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad user input.
    Validation,
    /// Referenced entity is absent.
    NotFound,
    /// Storage-level duplicate.
    UniqueConstraint,
    /// State transition requested on an item already in the target state.
    InvalidState,
    /// Stub or incomplete operation.
    NotImplemented,
    /// Anything else, including transport and storage faults.
    Other,
}

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors produced anywhere in the inventory pipeline.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Input failed a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row matched a lookup or mutation target.
    #[error("{entity} not found")]
    NotFound { entity: String },

    /// Storage rejected a write because of a uniqueness violation.
    ///
    /// ## When This Occurs
    /// - Creating an item whose name is already taken
    /// - Renaming an item to a name that is already taken
    #[error("unique constraint violation: {cause}")]
    UniqueConstraint {
        #[source]
        cause: BoxError,
    },

    /// Checkout of a checked-out item, or check-in of an available one.
    #[error("inventory item {id} is already {state}")]
    InvalidState { id: ItemId, state: Availability },

    /// `init_id` was called on an entity that already has an identity.
    #[error("inventory item already has id {id}")]
    IdAlreadyAssigned { id: ItemId },

    /// `init_id` was passed [`ItemId::INVALID`] instead of a storage id.
    #[error("{id} is not a storage-assigned inventory item id")]
    UnassignedId { id: ItemId },

    /// The requested operation has no implementation.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: String },

    /// An error that matched no known signature. Rendered exactly as the
    /// original error.
    #[error("{source}")]
    Unclassified {
        #[source]
        source: BoxError,
    },

    /// Stage-identifying wrapper around another taxonomy error.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<InventoryError>,
    },
}

impl InventoryError {
    /// Creates a NotFound error for the given entity type.
    pub fn not_found(entity: impl Into<String>) -> Self {
        InventoryError::NotFound {
            entity: entity.into(),
        }
    }

    /// Wraps a raw uniqueness failure.
    pub fn unique_constraint(cause: impl Into<BoxError>) -> Self {
        InventoryError::UniqueConstraint {
            cause: cause.into(),
        }
    }

    /// Passes an unrecognised error through.
    pub fn unclassified(source: impl Into<BoxError>) -> Self {
        InventoryError::Unclassified {
            source: source.into(),
        }
    }

    /// Creates a NotImplemented error for the named operation.
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        InventoryError::NotImplemented {
            operation: operation.into(),
        }
    }

    /// Wraps this error with a stage-identifying context string.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        InventoryError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the kind of this error, looking through context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Validation(_) => ErrorKind::Validation,
            InventoryError::NotFound { .. } => ErrorKind::NotFound,
            InventoryError::UniqueConstraint { .. } => ErrorKind::UniqueConstraint,
            InventoryError::InvalidState { .. } => ErrorKind::InvalidState,
            InventoryError::NotImplemented { .. } => ErrorKind::NotImplemented,
            InventoryError::IdAlreadyAssigned { .. }
            | InventoryError::UnassignedId { .. }
            | InventoryError::Unclassified { .. } => ErrorKind::Other,
            InventoryError::Context { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost taxonomy error beneath any context wrappers.
    pub fn root(&self) -> &InventoryError {
        match self {
            InventoryError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// Context Extension
// =============================================================================

/// Adds stage context to fallible results.
///
/// ## Example
/// ```rust
/// use stockpile_core::{InventoryItem, ResultExt};
///
/// let err = InventoryItem::new_available(" ", "AD12")
///     .context("could not create inventory item - factory error")
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "could not create inventory item - factory error: invalid name: must not be blank"
/// );
/// ```
pub trait ResultExt<T> {
    /// Wraps the error (if any) in [`InventoryError::Context`].
    fn context(self, context: impl Into<String>) -> InventoryResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<InventoryError>,
{
    fn context(self, context: impl Into<String>) -> InventoryResult<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("name", "must not be blank");
        assert_eq!(err.to_string(), "invalid name: must not be blank");

        let err: InventoryError = err.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "invalid name: must not be blank");
    }

    #[test]
    fn test_kind_survives_context() {
        let err = InventoryError::not_found("inventory item")
            .with_context("could not load")
            .with_context("could not check out");

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "could not check out: could not load: inventory item not found"
        );
        assert!(matches!(err.root(), InventoryError::NotFound { entity } if entity == "inventory item"));
    }

    #[test]
    fn test_unclassified_keeps_message_and_source() {
        let err = InventoryError::unclassified(io::Error::other("disk on fire"));
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), "disk on fire");

        let source = err.source().expect("source is kept");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_unique_constraint_message() {
        let err = InventoryError::unique_constraint("UNIQUE constraint failed: inventory_items.name");
        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);
        assert_eq!(
            err.to_string(),
            "unique constraint violation: UNIQUE constraint failed: inventory_items.name"
        );
    }

    #[test]
    fn test_invalid_state_message() {
        let err = InventoryError::InvalidState {
            id: ItemId::new(7),
            state: Availability::CheckedOut,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(err.to_string(), "inventory item 7 is already checked out");
    }

    #[test]
    fn test_result_ext_converts_validation_errors() {
        let result: Result<(), ValidationError> =
            Err(ValidationError::new("location", "must not be blank"));
        let err = result.context("factory error").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "factory error: invalid location: must not be blank");
    }

    #[test]
    fn test_other_kinds() {
        assert_eq!(
            InventoryError::not_implemented("bulk import").kind(),
            ErrorKind::NotImplemented
        );
        assert_eq!(
            InventoryError::IdAlreadyAssigned { id: ItemId::new(1) }.kind(),
            ErrorKind::Other
        );
        assert_eq!(
            InventoryError::UnassignedId { id: ItemId::INVALID }.kind(),
            ErrorKind::Other
        );
    }
}
