//! Item Context - 条目限界上下文
//!
//! 职责:
//! - Item 实体与标识
//! - 写入前的文本转义

mod entity;
mod sanitizer;
mod value_objects;

pub use entity::{Item, ItemDraft};
pub use sanitizer::sanitize;
pub use value_objects::ItemId;
