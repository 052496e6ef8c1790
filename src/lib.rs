//! items-service - 条目 CRUD HTTP 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Item Context: 条目实体、标识与文本转义
//!
//! 应用层 (application/):
//! - Ports: ItemRepository 端口定义
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储（测试替身）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
