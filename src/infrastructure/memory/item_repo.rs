//! In-Memory Item Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{ItemRepositoryPort, RepositoryError};
use crate::domain::item::{Item, ItemDraft, ItemId};

/// 内存条目仓储
///
/// ID 从 1 开始单调递增，删除后不复用（与 AUTOINCREMENT 一致）。
/// `set_failing(true)` 后所有操作返回存储错误。
pub struct InMemoryItemRepository {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 模拟存储层故障
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError(
                "in-memory store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<ItemId, RepositoryError> {
        self.check_available()?;
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.items.insert(id, Item::from_draft(id, draft.clone()));
        tracing::debug!(item_id = %id, "Item inserted (memory)");
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.check_available()?;
        let mut items: Vec<Item> = self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<u64, RepositoryError> {
        self.check_available()?;
        match self.items.get_mut(&id) {
            Some(mut item) => {
                *item = Item::from_draft(id, draft.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError> {
        self.check_available()?;
        Ok(self.items.remove(&id).map_or(0, |_| 1))
    }
}
