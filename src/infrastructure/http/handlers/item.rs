//! Item HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::{CreateItem, DeleteItem, ListItems, UpdateItem};
use crate::infrastructure::http::dto::{
    CreateItemRequest, CreatedResponse, ItemResponse, MessageResponse, UpdateItemRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ItemIdPath, ItemPayload};
use crate::infrastructure::http::state::AppState;

/// 创建条目
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    ItemPayload(req): ItemPayload<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let command = CreateItem {
        name: req.name,
        description: req.description,
    };

    let result = state.create_item_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: result.id })))
}

/// 获取条目列表
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.list_items_handler.handle(ListItems).await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// 更新条目
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemIdPath(item_id): ItemIdPath,
    ItemPayload(req): ItemPayload<UpdateItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = UpdateItem {
        item_id,
        name: req.name,
        description: req.description,
    };

    state.update_item_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Item updated successfully")))
}

/// 删除条目
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemIdPath(item_id): ItemIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_item_handler
        .handle(DeleteItem { item_id })
        .await?;

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::application::ItemRepositoryPort;
    use crate::infrastructure::http::{create_routes, AppState};
    use crate::infrastructure::memory::InMemoryItemRepository;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, init_schema, DatabaseConfig, DbPool, SqliteItemRepository,
    };

    fn app(repo: Arc<dyn ItemRepositoryPort>) -> Router {
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    async fn sqlite_app() -> (DbPool, Router) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        init_schema(&pool).await.unwrap();
        let repo = Arc::new(SqliteItemRepository::new(pool.clone()));
        (pool, app(repo))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(app: &Router, method: Method, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn list(app: &Router) -> Vec<Value> {
        let (status, body) = send(app, Method::GET, "/items", None).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().clone()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_id_and_sanitizes() {
        let (_pool, app) = sqlite_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/items",
            Some(json!({"name": "<b>x</b>", "description": "<i>y</i>"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();

        let items = list(&app).await;
        assert_eq!(
            items,
            vec![json!({
                "id": id,
                "name": "&lt;b&gt;x&lt;/b&gt;",
                "description": "&lt;i&gt;y&lt;/i&gt;"
            })]
        );
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let (_pool, app) = sqlite_app().await;

        let mut ids = Vec::new();
        for i in 0..5 {
            let (_, body) = send(&app, Method::POST, "/items", Some(json!({"name": format!("n{i}")}))).await;
            ids.push(body["id"].as_i64().unwrap());
        }

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_list_returns_every_created_item() {
        let (_pool, app) = sqlite_app().await;

        for i in 0..3 {
            send(
                &app,
                Method::POST,
                "/items",
                Some(json!({"name": format!("item {i}"), "description": format!("desc {i}")})),
            )
            .await;
        }

        let items = list(&app).await;
        assert_eq!(items.len(), 3);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item["name"], format!("item {i}"));
            assert_eq!(item["description"], format!("desc {i}"));
        }
    }

    #[tokio::test]
    async fn test_missing_description_is_listed_as_null() {
        let (_pool, app) = sqlite_app().await;

        send(&app, Method::POST, "/items", Some(json!({"name": "solo"}))).await;

        let items = list(&app).await;
        assert_eq!(items[0]["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_existing_changes_only_that_row() {
        let (_pool, app) = sqlite_app().await;
        let (_, a) = send(&app, Method::POST, "/items", Some(json!({"name": "a", "description": "da"}))).await;
        let (_, b) = send(&app, Method::POST, "/items", Some(json!({"name": "b", "description": "db"}))).await;
        let a_id = a["id"].as_i64().unwrap();
        let b_id = b["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/items/{a_id}"),
            Some(json!({"name": "<a2>", "description": "da2"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Item updated successfully"}));

        let items = list(&app).await;
        assert_eq!(items[0], json!({"id": a_id, "name": "&lt;a2&gt;", "description": "da2"}));
        assert_eq!(items[1], json!({"id": b_id, "name": "b", "description": "db"}));
    }

    #[tokio::test]
    async fn test_update_missing_returns_404_and_leaves_table() {
        let (_pool, app) = sqlite_app().await;
        send(&app, Method::POST, "/items", Some(json!({"name": "a", "description": "da"}))).await;
        let before = list(&app).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/items/9999",
            Some(json!({"name": "x", "description": "y"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Item not found"}));
        assert_eq!(list(&app).await, before);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let (_pool, app) = sqlite_app().await;
        let (_, created) = send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;
        let (_, other) = send(&app, Method::POST, "/items", Some(json!({"name": "b"}))).await;
        let uri = format!("/items/{}", created["id"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Item deleted successfully"}));

        let items = list(&app).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], other["id"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_dropped_table_yields_500_on_all_operations() {
        let (pool, app) = sqlite_app().await;
        send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;

        sqlx::query("DROP TABLE items").execute(&pool).await.unwrap();

        let expected = json!({"error": "Internal Server Error"});
        let requests = [
            (Method::POST, "/items", Some(json!({"name": "b"}))),
            (Method::GET, "/items", None),
            (Method::PUT, "/items/1", Some(json!({"name": "c"}))),
            (Method::DELETE, "/items/1", None),
        ];
        for (method, uri, body) in requests {
            let (status, response) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response, expected);
        }
    }

    #[tokio::test]
    async fn test_failing_repository_yields_500() {
        let repo = InMemoryItemRepository::new().arc();
        let app = app(repo.clone());
        let (_, created) = send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;
        let uri = format!("/items/{}", created["id"]);

        repo.set_failing(true);

        let (status, _) = send(&app, Method::POST, "/items", Some(json!({"name": "b"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, _) = send(&app, Method::GET, "/items", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "c"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let app = app(InMemoryItemRepository::new().arc());

        let (status, body) = send(&app, Method::POST, "/items", Some(json!({"description": "d"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app(InMemoryItemRepository::new().arc());

        let (status, _) = send_raw(&app, Method::POST, "/items", "application/json", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let app = app(InMemoryItemRepository::new().arc());

        let (status, _) = send(&app, Method::POST, "/items", Some(json!({"name": 5}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_content_type_is_bad_request() {
        let app = app(InMemoryItemRepository::new().arc());

        let (status, _) = send_raw(&app, Method::POST, "/items", "text/plain", "name=a").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_integer_id_is_bad_request() {
        let app = app(InMemoryItemRepository::new().arc());

        let (status, _) = send(&app, Method::DELETE, "/items/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::PUT, "/items/abc", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_form_encoded_create_and_update() {
        let repo = InMemoryItemRepository::new().arc();
        let app = app(repo.clone());
        let form = "application/x-www-form-urlencoded";

        let (status, body) = send_raw(&app, Method::POST, "/items", form, "name=%3Cb%3Ex&description=plain").await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/items/{}", body["id"]);

        let items = list(&app).await;
        assert_eq!(items[0]["name"], "&lt;b&gt;x");
        assert_eq!(items[0]["description"], "plain");

        let (status, _) = send_raw(&app, Method::PUT, &uri, form, "name=renamed").await;
        assert_eq!(status, StatusCode::OK);

        let items = list(&app).await;
        assert_eq!(items[0]["name"], "renamed");
        assert_eq!(items[0]["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_form_content_type_is_case_insensitive() {
        let app = app(InMemoryItemRepository::new().arc());

        for content_type in [
            "Application/X-WWW-Form-Urlencoded",
            "APPLICATION/X-WWW-FORM-URLENCODED; charset=UTF-8",
        ] {
            let (status, body) = send_raw(&app, Method::POST, "/items", content_type, "name=a").await;
            assert_eq!(status, StatusCode::CREATED, "content type {content_type}");
            assert!(body["id"].is_i64());
        }

        let (status, _) = send_raw(&app, Method::POST, "/items", "APPLICATION/JSON", r#"{"name":"b"}"#).await;
        assert_eq!(status, StatusCode::CREATED);

        let items = list(&app).await;
        let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
    }
}
