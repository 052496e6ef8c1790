//! Item Context - Entity

use super::{sanitize, ItemId};

/// 已持久化的 Item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    /// 由存储层分配的 ID 和草稿组装
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}

/// 待写入的 Item 内容
///
/// 不变量:
/// - name / description 均已经过 [`sanitize`]，只能通过 `new` 构造
/// - description 缺失时保持 `None`，不会被替换为空串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    name: String,
    description: Option<String>,
}

impl ItemDraft {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: sanitize(name),
            description: description.map(sanitize),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
