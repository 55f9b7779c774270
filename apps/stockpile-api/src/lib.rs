//! # stockpile-api: HTTP Server for the Inventory Tracker
//!
//! Service layer, HTTP controller, configuration, and router assembly. The
//! binary in `main.rs` only wires these together.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  routes (axum) ── path id / JSON body ──► ValidationError on failure   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryService ── find → mutate → save                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dyn InventoryRepository (stockpile-db)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok  → 200 / 201 / 204                                                 │
//! │  Err → ApiError: status from ErrorKind, body = message                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod service;

use axum::Router;
use stockpile_db::Database;

pub use config::{AppConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use service::{InventoryService, ItemInput};

/// Builds the complete application router.
pub fn app(service: InventoryService, db: Database) -> Router {
    Router::new()
        .merge(routes::inventory_router(service))
        .merge(routes::health_router(db))
}
