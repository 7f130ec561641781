use crate::domain::ports::{Item, ItemKey, KeyValueStore};
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process table with the same conditional-put semantics as DynamoDB.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<ItemKey, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Number of rows stored under one partition.
    pub async fn partition_len(&self, partition: &str) -> usize {
        self.items
            .read()
            .await
            .keys()
            .filter(|key| key.partition == partition)
            .count()
    }
}

impl KeyValueStore for MemoryStore {
    async fn put(&self, key: ItemKey, item: Item, must_not_exist: bool) -> Result<()> {
        let mut items = self.items.write().await;
        if must_not_exist && items.contains_key(&key) {
            return Err(ServiceError::Conflict {
                partition: key.partition,
                sort: key.sort,
            });
        }
        items.insert(key, item);
        Ok(())
    }

    async fn get(&self, key: ItemKey) -> Result<Option<Item>> {
        Ok(self.items.read().await.get(&key).cloned())
    }
}
