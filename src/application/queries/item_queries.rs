//! Item Queries

/// 列出所有条目查询
#[derive(Debug, Clone)]
pub struct ListItems;
