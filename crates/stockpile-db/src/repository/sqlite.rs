//! # SQL Inventory Repository
//!
//! [`InventoryRepository`] over SQLite.
//!
//! Every statement binds its values (`?1`, `?2`, ...); nothing is spliced
//! into SQL text. Every `sqlx::Error` goes through [`classify`] before it
//! leaves this file.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use stockpile_core::{InventoryError, InventoryItem, InventoryResult, ItemId, ENTITY_NAME};

use super::InventoryRepository;
use crate::error::classify;

/// One row of `inventory_items`.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    location: String,
    available: bool,
}

impl From<ItemRow> for InventoryItem {
    fn from(row: ItemRow) -> Self {
        InventoryItem::reincarnate(ItemId::new(row.id), row.name, row.location, row.available)
    }
}

/// Repository for inventory item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqlInventoryRepository::new(pool);
/// let id = repo.create(&item).await?;
/// let item = repo.find_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqlInventoryRepository {
    pool: SqlitePool,
}

impl SqlInventoryRepository {
    /// Creates a new SqlInventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqlInventoryRepository { pool }
    }
}

#[async_trait]
impl InventoryRepository for SqlInventoryRepository {
    async fn find_by_id(&self, id: ItemId) -> InventoryResult<InventoryItem> {
        debug!(%id, "Fetching inventory item");

        // fetch_one reports a missing row as RowNotFound, which the
        // classifier turns into NotFound.
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, location, available
            FROM inventory_items
            WHERE id = ?1
            "#,
        )
        .bind(id.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, ENTITY_NAME))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> InventoryResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, location, available
            FROM inventory_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(e, ENTITY_NAME))?;

        debug!(count = rows.len(), "Listed inventory items");
        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    async fn create(&self, item: &InventoryItem) -> InventoryResult<ItemId> {
        debug!(name = %item.name(), "Inserting inventory item");

        let result = sqlx::query(
            r#"
            INSERT INTO inventory_items (name, location, available)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(item.name())
        .bind(item.location())
        .bind(item.is_available())
        .execute(&self.pool)
        .await
        .map_err(|e| classify(e, ENTITY_NAME))?;

        let id = ItemId::new(result.last_insert_rowid());
        debug!(%id, "Inventory item inserted");
        Ok(id)
    }

    async fn update(&self, item: &InventoryItem) -> InventoryResult<()> {
        debug!(id = %item.id(), "Updating inventory item");

        let result = sqlx::query(
            r#"
            UPDATE inventory_items SET
                name = ?2,
                location = ?3,
                available = ?4
            WHERE id = ?1
            "#,
        )
        .bind(item.id().get())
        .bind(item.name())
        .bind(item.location())
        .bind(item.is_available())
        .execute(&self.pool)
        .await
        .map_err(|e| classify(e, ENTITY_NAME))?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::not_found(ENTITY_NAME));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: ItemId) -> InventoryResult<()> {
        debug!(%id, "Deleting inventory item");

        let result = sqlx::query("DELETE FROM inventory_items WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY_NAME))?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::not_found(ENTITY_NAME));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
