//! Item Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateItem, DeleteItem, UpdateItem};
use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::domain::item::{ItemDraft, ItemId};

// ============================================================================
// CreateItem
// ============================================================================

/// 创建条目响应
#[derive(Debug, Clone)]
pub struct CreateItemResponse {
    pub id: ItemId,
}

/// CreateItem Handler
pub struct CreateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl CreateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: CreateItem) -> Result<CreateItemResponse, ApplicationError> {
        let draft = ItemDraft::new(&command.name, command.description.as_deref());
        let id = self.item_repo.insert(&draft).await?;

        tracing::info!(item_id = %id, name = %draft.name(), "Item created");

        Ok(CreateItemResponse { id })
    }
}

// ============================================================================
// UpdateItem
// ============================================================================

/// UpdateItem Handler
pub struct UpdateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl UpdateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: UpdateItem) -> Result<(), ApplicationError> {
        let item_id = command.item_id;
        let draft = ItemDraft::new(&command.name, command.description.as_deref());

        let changed = self.item_repo.update(item_id, &draft).await?;
        if changed == 0 {
            return Err(ApplicationError::not_found("Item", item_id));
        }

        tracing::info!(item_id = %item_id, "Item updated");

        Ok(())
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
pub struct DeleteItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl DeleteItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: DeleteItem) -> Result<(), ApplicationError> {
        let item_id = command.item_id;

        // 不预先查询，直接以受影响行数判断是否存在
        let removed = self.item_repo.delete(item_id).await?;
        if removed == 0 {
            return Err(ApplicationError::not_found("Item", item_id));
        }

        tracing::info!(item_id = %item_id, "Item deleted");

        Ok(())
    }
}
