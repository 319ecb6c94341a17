//! Integration tests for the SQLite row store.
//!
//! Each test runs against its own in-memory database. The pool is capped
//! at one connection because an in-memory SQLite database is private to
//! the connection that opened it.

use cart_store::{ProductRow, RowStore, SqliteRowStore};
use sqlx::sqlite::SqlitePoolOptions;

async fn connect() -> SqliteRowStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");
    SqliteRowStore::new(pool)
}

fn row(id: i64, name: &str, price: f64, category: &str) -> ProductRow {
    ProductRow {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
    }
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let store = connect().await;

    store.init_schema().await.unwrap();
    store.init_schema().await.unwrap();

    assert_eq!(store.fetch_all().await.unwrap(), vec![]);
}

#[tokio::test]
async fn upsert_inserts_new_row() {
    let store = connect().await;
    store.init_schema().await.unwrap();

    store.upsert(&row(1, "Widget", 9.99, "Tools")).await.unwrap();

    let rows = store.fetch_all().await.unwrap();
    assert_eq!(rows, vec![row(1, "Widget", 9.99, "Tools")]);
}

#[tokio::test]
async fn upsert_overwrites_all_non_key_fields_on_conflict() {
    let store = connect().await;
    store.init_schema().await.unwrap();

    store.upsert(&row(1, "Widget", 9.99, "Tools")).await.unwrap();
    store
        .upsert(&row(1, "Widget Pro", 12.50, "Hardware"))
        .await
        .unwrap();

    let rows = store.fetch_all().await.unwrap();
    assert_eq!(rows, vec![row(1, "Widget Pro", 12.50, "Hardware")]);
}

#[tokio::test]
async fn delete_by_id_reports_affected_rows() {
    let store = connect().await;
    store.init_schema().await.unwrap();

    store.upsert(&row(1, "Widget", 9.99, "Tools")).await.unwrap();

    assert_eq!(store.delete_by_id(1).await.unwrap(), 1);
    assert_eq!(store.delete_by_id(1).await.unwrap(), 0);
    assert_eq!(store.delete_by_id(42).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_all_empties_the_table() {
    let store = connect().await;
    store.init_schema().await.unwrap();

    store.upsert(&row(1, "Widget", 9.99, "Tools")).await.unwrap();
    store.upsert(&row(2, "Hammer", 5.00, "Tools")).await.unwrap();

    assert_eq!(store.delete_all().await.unwrap(), 2);
    assert_eq!(store.fetch_all().await.unwrap(), vec![]);
}

#[tokio::test]
async fn fetch_all_orders_by_id() {
    let store = connect().await;
    store.init_schema().await.unwrap();

    store.upsert(&row(3, "Saw", 19.99, "Tools")).await.unwrap();
    store.upsert(&row(1, "Widget", 9.99, "Tools")).await.unwrap();
    store.upsert(&row(2, "Hammer", 5.00, "Tools")).await.unwrap();

    let ids: Vec<i64> = store
        .fetch_all()
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
