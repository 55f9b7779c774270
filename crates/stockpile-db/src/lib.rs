//! # stockpile-db: Database Layer for Stockpile
//!
//! The inventory repository port, its SQLite and in-memory adapters, the
//! driver error classifier, and pool/migration plumbing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile Data Flow                              │
//! │                                                                         │
//! │  InventoryService (stockpile-api)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockpile-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (repository/)  │    │  (embedded)  │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SqlInventory.. │    │ 001_create_  │  │   │
//! │  │   │ Connection    │    │ InMemory..     │    │ inventory_.. │  │   │
//! │  │   │ Management    │    │                │    │              │  │   │
//! │  │   └───────────────┘    └───────┬────────┘    └──────────────┘  │   │
//! │  │                                │ sqlx::Error                    │   │
//! │  │                                ▼                                │   │
//! │  │                         error::classify → InventoryError        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (WAL mode)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool management
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Setup errors and the driver error classifier
//! - [`repository`] - The repository port and its adapters
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockpile_db::{Database, DbConfig, InventoryRepository};
//!
//! let db = Database::new(DbConfig::new("stockpile.db")).await?;
//! let items = db.inventory().find_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{classify, DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::{InMemoryInventoryRepository, InventoryRepository, SqlInventoryRepository};
