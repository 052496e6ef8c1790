//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::item::{Item, ItemDraft, ItemId};

/// Repository 错误
///
/// 所有存储层失败都归为此类，对调用方不透明
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Item Repository Port
///
/// 每个方法对应一条独立的 SQL 语句，不跨语句开启事务
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// 插入新条目，返回存储层分配的 ID
    async fn insert(&self, draft: &ItemDraft) -> Result<ItemId, RepositoryError>;

    /// 获取所有条目（按 ID 升序）
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;

    /// 覆盖 name / description，返回受影响行数
    async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<u64, RepositoryError>;

    /// 删除条目，返回受影响行数
    async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError>;
}
