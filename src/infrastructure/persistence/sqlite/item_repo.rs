//! SQLite Item Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{ItemRepositoryPort, RepositoryError};
use crate::domain::item::{Item, ItemDraft, ItemId};

/// SQLite Item Repository
pub struct SqliteItemRepository {
    pool: DbPool,
}

impl SqliteItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ItemRepositoryPort for SqliteItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<ItemId, RepositoryError> {
        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(draft.name())
            .bind(draft.description())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(ItemId::new(result.last_insert_rowid()))
    }

    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT id, name, description FROM items ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(draft.name())
            .bind(draft.description())
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}
