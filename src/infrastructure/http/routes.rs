//! HTTP Routes
//!
//! API Endpoints:
//! - /items        POST    创建条目
//! - /items        GET     列出所有条目
//! - /items/:id    PUT     更新条目
//! - /items/:id    DELETE  删除条目

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/:id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
}
