//! Memory Layer - In-Memory Implementations
//!
//! ItemRepository 的内存实现，用于测试替身和无磁盘运行

mod item_repo;

pub use item_repo::InMemoryItemRepository;
