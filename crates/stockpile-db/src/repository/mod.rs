//! # Repository Module
//!
//! The storage-agnostic inventory repository port and its adapters.
//!
//! ## Port and Adapters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  InventoryService                                                      │
//! │       │                                                                 │
//! │       │  repo.find_by_id(id)                                           │
//! │       ▼                                                                 │
//! │  dyn InventoryRepository   ← the ONLY contract the service sees        │
//! │  ├── find_by_id(id)                                                    │
//! │  ├── find_all()                                                        │
//! │  ├── create(&item) → id                                                │
//! │  ├── update(&item)                                                     │
//! │  └── delete_by_id(id)                                                  │
//! │       │                                                                 │
//! │       ├──────────────────────────┐                                      │
//! │       ▼                          ▼                                      │
//! │  SqlInventoryRepository     InMemoryInventoryRepository                │
//! │  (SQLite, sqlx)             (tests, no storage)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Adapters
//!
//! - [`SqlInventoryRepository`] - parameterized SQL over a `SqlitePool`
//! - [`InMemoryInventoryRepository`] - `BTreeMap` behind a lock

use async_trait::async_trait;
use stockpile_core::{InventoryItem, InventoryResult, ItemId};

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryInventoryRepository;
pub use sqlite::SqlInventoryRepository;

/// Persistence contract for inventory items.
///
/// Every error is already a taxonomy error: implementations classify their
/// own storage failures before returning.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Returns the persisted item, or `NotFound` if absent.
    async fn find_by_id(&self, id: ItemId) -> InventoryResult<InventoryItem>;

    /// Returns every item, ordered by id.
    async fn find_all(&self) -> InventoryResult<Vec<InventoryItem>>;

    /// Persists a new item and returns its assigned id.
    ///
    /// Fails with `UniqueConstraint` if the name is taken.
    async fn create(&self, item: &InventoryItem) -> InventoryResult<ItemId>;

    /// Persists changes to the row keyed by `item.id()`.
    ///
    /// Fails with `NotFound` if the row no longer exists and with
    /// `UniqueConstraint` if the new name is taken.
    async fn update(&self, item: &InventoryItem) -> InventoryResult<()>;

    /// Removes the row, or fails with `NotFound`.
    async fn delete_by_id(&self, id: ItemId) -> InventoryResult<()>;
}
