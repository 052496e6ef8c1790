//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod item_repo;

pub use database::*;
pub use item_repo::*;
