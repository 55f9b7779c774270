//! # Inventory Service
//!
//! The only place multi-step operations are sequenced.
//!
//! ## Operation Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Service Operations                                   │
//! │                                                                         │
//! │  create     new_available ──► repo.create ──► init_id                  │
//! │  read       repo.find_by_id                                            │
//! │  read_all   repo.find_all                                              │
//! │  delete     repo.delete_by_id                                          │
//! │                                                                         │
//! │  update     ┐                                                           │
//! │  checkout   ├─ repo.find_by_id ──► mutate entity ──► repo.update       │
//! │  check_in   ┘                                                           │
//! │                                                                         │
//! │  The entity's own guards (validation, state machine) decide whether    │
//! │  a mutation is allowed; SQL never does.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Find-mutate-save is not wrapped in a transaction. Two concurrent writers
//! to the same item can overwrite each other; uniqueness still holds because
//! the store enforces it.
//!
//! Failures are wrapped with a stage prefix such as
//! `"could not create inventory item - repository error"`. The wrapped
//! error's kind is unchanged.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use stockpile_core::{InventoryItem, InventoryResult, ItemId, ResultExt};
use stockpile_db::InventoryRepository;

/// User-supplied item fields, for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub location: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        ItemInput {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Orchestrates validation, entity lifecycle calls and repository calls.
///
/// Cheap to clone: clones share the repository.
#[derive(Clone)]
pub struct InventoryService {
    repo: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    /// Creates a service over the given repository.
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        InventoryService { repo }
    }

    /// Validates and persists a new, available item.
    ///
    /// ## Returns
    /// * `Ok(item)` - the item, carrying its assigned id
    /// * `Err(_)` - `"... - factory error"` for invalid input,
    ///   `"... - repository error"` for storage failures (e.g. duplicate name)
    pub async fn create(&self, input: ItemInput) -> InventoryResult<InventoryItem> {
        let mut item = InventoryItem::new_available(input.name, input.location)
            .context("could not create inventory item - factory error")?;

        let id = self
            .repo
            .create(&item)
            .await
            .context("could not create inventory item - repository error")?;

        item.init_id(id)
            .context("could not create inventory item - identity error")?;

        info!(%id, name = %item.name(), "Inventory item created");
        Ok(item)
    }

    /// Returns the item with the given id. Errors pass through unchanged.
    pub async fn read(&self, id: ItemId) -> InventoryResult<InventoryItem> {
        debug!(%id, "Reading inventory item");
        self.repo.find_by_id(id).await
    }

    /// Returns every item.
    pub async fn read_all(&self) -> InventoryResult<Vec<InventoryItem>> {
        self.repo.find_all().await
    }

    /// Replaces the name and location of an existing item.
    pub async fn update(&self, id: ItemId, input: ItemInput) -> InventoryResult<()> {
        const CONTEXT: &str = "could not update inventory item";

        let mut item = self
            .repo
            .find_by_id(id)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        item.change_name(input.name)
            .context(format!("{CONTEXT} - validation error"))?;
        item.change_location(input.location)
            .context(format!("{CONTEXT} - validation error"))?;

        self.repo
            .update(&item)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        info!(%id, "Inventory item updated");
        Ok(())
    }

    /// Removes an item.
    pub async fn delete(&self, id: ItemId) -> InventoryResult<()> {
        self.repo
            .delete_by_id(id)
            .await
            .context("could not delete inventory item - repository error")?;

        info!(%id, "Inventory item deleted");
        Ok(())
    }

    /// Marks an available item as checked out.
    pub async fn checkout(&self, id: ItemId) -> InventoryResult<()> {
        const CONTEXT: &str = "could not check out inventory item";

        let mut item = self
            .repo
            .find_by_id(id)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        item.checkout().context(format!("{CONTEXT} - state error"))?;

        self.repo
            .update(&item)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        info!(%id, "Inventory item checked out");
        Ok(())
    }

    /// Marks a checked-out item as available again.
    pub async fn check_in(&self, id: ItemId) -> InventoryResult<()> {
        const CONTEXT: &str = "could not check in inventory item";

        let mut item = self
            .repo
            .find_by_id(id)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        item.check_in().context(format!("{CONTEXT} - state error"))?;

        self.repo
            .update(&item)
            .await
            .context(format!("{CONTEXT} - repository error"))?;

        info!(%id, "Inventory item checked in");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io;
    use stockpile_core::{ErrorKind, InventoryError};
    use stockpile_db::InMemoryInventoryRepository;

    fn service() -> InventoryService {
        InventoryService::new(Arc::new(InMemoryInventoryRepository::new()))
    }

    /// Repository whose every call fails with an unrecognised error.
    struct BrokenRepository;

    fn broken() -> InventoryError {
        InventoryError::unclassified(io::Error::other("database is locked"))
    }

    #[async_trait]
    impl InventoryRepository for BrokenRepository {
        async fn find_by_id(&self, _id: ItemId) -> InventoryResult<InventoryItem> {
            Err(broken())
        }
        async fn find_all(&self) -> InventoryResult<Vec<InventoryItem>> {
            Err(broken())
        }
        async fn create(&self, _item: &InventoryItem) -> InventoryResult<ItemId> {
            Err(broken())
        }
        async fn update(&self, _item: &InventoryItem) -> InventoryResult<()> {
            Err(broken())
        }
        async fn delete_by_id(&self, _id: ItemId) -> InventoryResult<()> {
            Err(broken())
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let service = service();
        let item = service
            .create(ItemInput::new("Cool Runnings", "AD12"))
            .await
            .unwrap();

        assert!(item.id().is_valid());
        assert!(item.is_available());
        assert_eq!(service.read(item.id()).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_create_invalid_input_is_factory_error() {
        let err = service()
            .create(ItemInput::new("Cool Runnings", " "))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "could not create inventory item - factory error: invalid location: must not be blank"
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_is_repository_error() {
        let service = service();
        service.create(ItemInput::new("Cool Runnings", "AD12")).await.unwrap();

        let err = service
            .create(ItemInput::new("Cool Runnings", "B7"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);
        assert!(err
            .to_string()
            .starts_with("could not create inventory item - repository error: "));
    }

    #[tokio::test]
    async fn test_read_missing_is_unwrapped_not_found() {
        let err = service().read(ItemId::new(9)).await.unwrap_err();
        assert!(matches!(err, InventoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_read_all() {
        let service = service();
        assert!(service.read_all().await.unwrap().is_empty());

        service.create(ItemInput::new("Alpha", "A1")).await.unwrap();
        service.create(ItemInput::new("Bravo", "B1")).await.unwrap();

        let names: Vec<String> = service
            .read_all()
            .await
            .unwrap()
            .iter()
            .map(|item| item.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }

    #[tokio::test]
    async fn test_update_changes_fields_and_keeps_state() {
        let service = service();
        let id = service.create(ItemInput::new("Alpha", "A1")).await.unwrap().id();
        service.checkout(id).await.unwrap();

        service.update(id, ItemInput::new("Alpha Prime", "A2")).await.unwrap();

        let item = service.read(id).await.unwrap();
        assert_eq!(item.name(), "Alpha Prime");
        assert_eq!(item.location(), "A2");
        assert!(!item.is_available());
    }

    #[tokio::test]
    async fn test_update_failures_keep_their_kind() {
        let service = service();
        let alpha = service.create(ItemInput::new("Alpha", "A1")).await.unwrap().id();
        service.create(ItemInput::new("Bravo", "B1")).await.unwrap();

        let err = service
            .update(ItemId::new(999), ItemInput::new("Zulu", "Z1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = service.update(alpha, ItemInput::new("", "A1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = service.update(alpha, ItemInput::new("Bravo", "A1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);

        // Nothing was saved by the failed attempts
        let item = service.read(alpha).await.unwrap();
        assert_eq!(item.name(), "Alpha");
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let id = service.create(ItemInput::new("Alpha", "A1")).await.unwrap().id();

        service.delete(id).await.unwrap();
        assert_eq!(service.read(id).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(service.delete(id).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_checkout_and_check_in() {
        let service = service();
        let id = service.create(ItemInput::new("Alpha", "A1")).await.unwrap().id();

        service.checkout(id).await.unwrap();
        assert!(!service.read(id).await.unwrap().is_available());

        let err = service.checkout(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            format!("could not check out inventory item - state error: inventory item {id} is already checked out")
        );

        service.check_in(id).await.unwrap();
        assert!(service.read(id).await.unwrap().is_available());

        let err = service.check_in(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[tokio::test]
    async fn test_state_change_on_missing_item_is_not_found() {
        // A missing id must surface as NotFound (404), never as a generic error
        let service = service();

        let err = service.checkout(ItemId::new(999_999)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = service.check_in(ItemId::new(999_999)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unclassified_errors_pass_through() {
        let service = InventoryService::new(Arc::new(BrokenRepository));

        let err = service.read(ItemId::new(1)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), "database is locked");

        let err = service.create(ItemInput::new("Alpha", "A1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(
            err.to_string(),
            "could not create inventory item - repository error: database is locked"
        );

        assert_eq!(service.read_all().await.unwrap_err().kind(), ErrorKind::Other);
        assert_eq!(service.delete(ItemId::new(1)).await.unwrap_err().kind(), ErrorKind::Other);
        assert_eq!(service.checkout(ItemId::new(1)).await.unwrap_err().kind(), ErrorKind::Other);
    }
}
