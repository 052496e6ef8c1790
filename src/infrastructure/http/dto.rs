//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::item::{Item, ItemId};

// ============================================================================
// 通用响应
// ============================================================================

/// 带说明文字的确认响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

// ============================================================================
// Item DTOs
// ============================================================================

/// POST /items 请求体
///
/// `name` 必填；`description` 可省略，省略时存为 NULL
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT /items/:id 请求体
///
/// 整体覆盖：省略 `description` 会把它清空为 NULL
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: ItemId,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}
