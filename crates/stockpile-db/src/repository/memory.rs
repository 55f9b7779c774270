//! # In-Memory Inventory Repository
//!
//! [`InventoryRepository`] without storage, for service and controller
//! tests. Mirrors the SQL adapter's observable behaviour: unique names,
//! never-reused ids, `NotFound` on missing rows.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stockpile_core::{InventoryError, InventoryItem, InventoryResult, ItemId, ENTITY_NAME};

use super::InventoryRepository;

#[derive(Debug, Default)]
struct MemoryState {
    items: BTreeMap<ItemId, InventoryItem>,
    last_id: i64,
}

impl MemoryState {
    fn name_taken(&self, name: &str, except: Option<ItemId>) -> bool {
        self.items
            .values()
            .any(|item| item.name() == name && Some(item.id()) != except)
    }
}

/// Inventory repository backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn duplicate_name(name: &str) -> InventoryError {
    InventoryError::unique_constraint(format!(
        "UNIQUE constraint failed: inventory_items.name ({name})"
    ))
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn find_by_id(&self, id: ItemId) -> InventoryResult<InventoryItem> {
        self.state
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| InventoryError::not_found(ENTITY_NAME))
    }

    async fn find_all(&self) -> InventoryResult<Vec<InventoryItem>> {
        Ok(self.state.read().await.items.values().cloned().collect())
    }

    async fn create(&self, item: &InventoryItem) -> InventoryResult<ItemId> {
        let mut state = self.state.write().await;

        if state.name_taken(item.name(), None) {
            return Err(duplicate_name(item.name()));
        }

        state.last_id += 1;
        let id = ItemId::new(state.last_id);
        let stored =
            InventoryItem::reincarnate(id, item.name(), item.location(), item.is_available());
        state.items.insert(id, stored);

        Ok(id)
    }

    async fn update(&self, item: &InventoryItem) -> InventoryResult<()> {
        let mut state = self.state.write().await;

        if !state.items.contains_key(&item.id()) {
            return Err(InventoryError::not_found(ENTITY_NAME));
        }
        if state.name_taken(item.name(), Some(item.id())) {
            return Err(duplicate_name(item.name()));
        }

        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: ItemId) -> InventoryResult<()> {
        self.state
            .write()
            .await
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| InventoryError::not_found(ENTITY_NAME))
    }
}
