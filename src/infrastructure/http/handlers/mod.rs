//! HTTP Handlers

mod item;

pub use item::*;
