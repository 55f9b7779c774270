//! # stockpile-core: Inventory Domain for Stockpile
//!
//! The inventory item entity, its availability state machine and the error
//! taxonomy every other crate speaks. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               HTTP Controller (stockpile-api)                   │   │
//! │  │    POST /inventory, GET /inventory/{id}, PUT .../checkout ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               InventoryService (stockpile-api)                  │   │
//! │  │               find → mutate → save                              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockpile-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │     item      │  │     error     │  │  validation   │      │   │
//! │  │   │ InventoryItem │  │InventoryError │  │  field rules  │      │   │
//! │  │   │ state machine │  │  ErrorKind    │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           stockpile-db (Repository port + SQLite adapter)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - `InventoryItem`, `ItemId`, `Availability`
//! - [`error`] - `InventoryError`, `ValidationError`, `ErrorKind`
//! - [`validation`] - Field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockpile_core::{ErrorKind, InventoryItem};
//!
//! let mut item = InventoryItem::new_available("Cool Runnings", "AD12").unwrap();
//! item.checkout().unwrap();
//!
//! // Checking out twice is an error, never a silent no-op
//! let err = item.checkout().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidState);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BoxError, ErrorKind, InventoryError, InventoryResult, ResultExt, ValidationError};
pub use item::{Availability, InventoryItem, ItemId, ENTITY_NAME};
