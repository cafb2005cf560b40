//! In-memory item store for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::store::{Item, ItemId, ItemStore, StoreResult};

/// In-memory implementation of [`ItemStore`].
///
/// Items are kept in insertion order, matching the natural order a fresh
/// document collection lists them in. Ids are generated locally with the
/// same format the real store assigns.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Item>> {
        // A poisoned lock means a panic mid-mutation in another test thread;
        // the Vec itself is still valid either way.
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, name: &str) -> StoreResult<ItemId> {
        let id = ItemId::generate();
        self.lock().push(Item {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.lock().clone())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<u64> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| item.name != name);
        Ok((before - items.len()) as u64)
    }

    async fn delete_by_id(&self, id: ItemId) -> StoreResult<u64> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok((before - items.len()) as u64)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut items = self.lock();
        let count = items.len() as u64;
        items.clear();
        Ok(count)
    }
}
