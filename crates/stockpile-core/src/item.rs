//! # Inventory Item
//!
//! The single entity Stockpile tracks: identity, attributes and a two-state
//! availability state machine.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      InventoryItem Lifecycle                            │
//! │                                                                         │
//! │  new_available(name, location)   ← untrusted input, validated          │
//! │       │  id = ItemId::INVALID, available = true                        │
//! │       ▼                                                                 │
//! │  repository.create(&item) → id                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  init_id(id)                     ← exactly once                        │
//! │                                                                         │
//! │  reincarnate(id, ...)            ← trusted storage rows, NOT validated │
//! │                                                                         │
//! │  State machine (available flag):                                       │
//! │                                                                         │
//! │            checkout()                                                   │
//! │   ┌───────────┐ ──────────────► ┌────────────┐                         │
//! │   │ Available │                 │ CheckedOut │                         │
//! │   └───────────┘ ◄────────────── └────────────┘                         │
//! │            check_in()                                                   │
//! │                                                                         │
//! │  Repeating a transition is an error, never a silent no-op.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::validation::{validate_location, validate_name, ValidationResult};

/// Entity type name used in NotFound errors.
pub const ENTITY_NAME: &str = "inventory item";

// =============================================================================
// Item ID
// =============================================================================

/// Storage-assigned identifier of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Sentinel for an item that has not been persisted yet.
    pub const INVALID: ItemId = ItemId(-1);

    /// Wraps a raw id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ItemId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true unless this is [`ItemId::INVALID`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ItemId)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId(id)
    }
}

// =============================================================================
// Availability
// =============================================================================

/// The two states of the availability state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    CheckedOut,
}

impl Availability {
    fn from_flag(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::CheckedOut
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::CheckedOut => f.write_str("checked out"),
        }
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// An inventory item.
///
/// Fields are private so every change goes through a method that upholds
/// the entity's invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    location: String,
    available: bool,
}

impl InventoryItem {
    /// Creates a new, unpersisted, available item from user input.
    ///
    /// ## Rules
    /// - `name` and `location` must be non-blank
    /// - neither may carry leading or trailing whitespace
    ///
    /// Name is checked before location, so an input with two bad fields
    /// reports `name`.
    ///
    /// ## Example
    /// ```rust
    /// use stockpile_core::{InventoryItem, ItemId};
    ///
    /// let item = InventoryItem::new_available("Cool Runnings", "AD12").unwrap();
    /// assert!(item.is_available());
    /// assert_eq!(item.id(), ItemId::INVALID);
    ///
    /// let err = InventoryItem::new_available("Cool Runnings", "").unwrap_err();
    /// assert_eq!(err.field, "location");
    /// ```
    pub fn new_available(
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let location = location.into();

        validate_name(&name)?;
        validate_location(&location)?;

        Ok(InventoryItem {
            id: ItemId::INVALID,
            name,
            location,
            available: true,
        })
    }

    /// Rebuilds an item from a storage row.
    ///
    /// Storage only ever holds values that passed through
    /// [`InventoryItem::new_available`] or the mutators, so nothing is
    /// re-validated here. Never call this with user input.
    pub fn reincarnate(
        id: ItemId,
        name: impl Into<String>,
        location: impl Into<String>,
        available: bool,
    ) -> Self {
        InventoryItem {
            id,
            name: name.into(),
            location: location.into(),
            available,
        }
    }

    /// Assigns the storage id. Fails if the item already has one, whatever
    /// value is passed. [`ItemId::INVALID`] is refused and leaves the item
    /// unassigned.
    pub fn init_id(&mut self, id: ItemId) -> InventoryResult<()> {
        if self.id.is_valid() {
            return Err(InventoryError::IdAlreadyAssigned { id: self.id });
        }
        if !id.is_valid() {
            return Err(InventoryError::UnassignedId { id });
        }

        self.id = id;
        Ok(())
    }

    /// Available → CheckedOut.
    pub fn checkout(&mut self) -> InventoryResult<()> {
        if !self.available {
            return Err(InventoryError::InvalidState {
                id: self.id,
                state: Availability::CheckedOut,
            });
        }

        self.available = false;
        Ok(())
    }

    /// CheckedOut → Available.
    pub fn check_in(&mut self) -> InventoryResult<()> {
        if self.available {
            return Err(InventoryError::InvalidState {
                id: self.id,
                state: Availability::Available,
            });
        }

        self.available = true;
        Ok(())
    }

    /// Replaces the name. The item is left untouched on error.
    pub fn change_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the location. The item is left untouched on error.
    pub fn change_location(&mut self, location: impl Into<String>) -> ValidationResult<()> {
        let location = location.into();
        validate_location(&location)?;
        self.location = location;
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Current state of the availability state machine.
    pub fn status(&self) -> Availability {
        Availability::from_flag(self.available)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
