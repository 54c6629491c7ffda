// ==========================
// backend-lib/tests/common/mod.rs
// ==========================
//! Shared fixtures for integration tests.

use radvault_backend_lib::db;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied. A single
/// connection keeps every query on the same in-memory instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    db::init_schema(&pool).await.expect("apply schema");
    pool
}

/// Insert a radcheck row directly, bypassing the service layer.
#[allow(dead_code)]
pub async fn seed_radcheck(pool: &SqlitePool, username: &str, attribute: &str, value: &str) {
    sqlx::query("INSERT INTO radcheck (username, attribute, op, value) VALUES (?, ?, ':=', ?)")
        .bind(username)
        .bind(attribute)
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

/// Insert a radreply row directly.
#[allow(dead_code)]
pub async fn seed_radreply(pool: &SqlitePool, username: &str, attribute: &str, value: &str) {
    sqlx::query("INSERT INTO radreply (username, attribute, op, value) VALUES (?, ?, '=', ?)")
        .bind(username)
        .bind(attribute)
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

/// Count rows for a username in the given table.
#[allow(dead_code)]
pub async fn count_rows(pool: &SqlitePool, table: &str, username: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE username = ?");
    sqlx::query_scalar(&sql)
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}
