use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::{ProductRow, Result, RowStore};

/// SQLite-backed row store implementation.
///
/// Every operation acquires its own pooled connection and releases it on
/// all exit paths, including failure; calls are independent and
/// non-transactional.
#[derive(Clone)]
pub struct SqliteRowStore {
    pool: SqlitePool,
}

impl SqliteRowStore {
    /// Creates a new SQLite row store over an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_product(row: SqliteRow) -> Result<ProductRow> {
        Ok(ProductRow {
            id: row.try_get("ProductID")?,
            name: row.try_get("Name")?,
            price: row.try_get("Price")?,
            category: row.try_get("Category")?,
        })
    }
}

#[async_trait]
impl RowStore for SqliteRowStore {
    #[tracing::instrument(skip(self))]
    async fn init_schema(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Products (
                ProductID INTEGER PRIMARY KEY,
                Name TEXT NOT NULL,
                Price REAL NOT NULL,
                Category TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, row), fields(product_id = row.id))]
    async fn upsert(&self, row: &ProductRow) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO Products (ProductID, Name, Price, Category)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(ProductID) DO UPDATE SET
                Name = excluded.Name,
                Price = excluded.Price,
                Category = excluded.Category
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(row.price)
        .bind(&row.category)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM Products WHERE ProductID = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM Products")
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<ProductRow>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query("SELECT ProductID, Name, Price, Category FROM Products ORDER BY ProductID")
            .fetch_all(&mut *conn)
            .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }
}
