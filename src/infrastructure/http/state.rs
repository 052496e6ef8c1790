//! Application State
//!
//! 持有仓储端口和所有 Command/Query Handlers，由 main 显式构造后注入路由

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, DeleteItemHandler, UpdateItemHandler,
    // Query handlers
    ListItemsHandler,
    // Ports
    ItemRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_item_handler: CreateItemHandler,
    pub update_item_handler: UpdateItemHandler,
    pub delete_item_handler: DeleteItemHandler,

    // ========== Query Handlers ==========
    pub list_items_handler: ListItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self {
            create_item_handler: CreateItemHandler::new(item_repo.clone()),
            update_item_handler: UpdateItemHandler::new(item_repo.clone()),
            delete_item_handler: DeleteItemHandler::new(item_repo.clone()),

            list_items_handler: ListItemsHandler::new(item_repo),
        }
    }
}
