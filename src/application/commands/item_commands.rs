//! Item Commands

use crate::domain::item::ItemId;

/// 创建条目命令
///
/// 字段为原始输入，转义在处理器中完成
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
}

/// 更新条目命令
#[derive(Debug, Clone)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

/// 删除条目命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub item_id: ItemId,
}
