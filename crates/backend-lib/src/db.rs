// ============================
// radvault-backend-lib/src/db.rs
// ============================
//! Pool construction and schema bootstrap for the SQLite store.
//!
//! The schema mirrors the conventional FreeRADIUS SQL layout:
//! `radcheck` and `radreply` hold per-user attributes, `nas` is the
//! client registry. `nas` rows are soft-deleted, so the uniqueness of
//! `nasname` is enforced by a partial index over live rows only.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS radcheck (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        username  TEXT NOT NULL DEFAULT '',
        attribute TEXT NOT NULL DEFAULT '',
        op        TEXT NOT NULL DEFAULT ':=',
        value     TEXT NOT NULL DEFAULT ''
    )",
    "CREATE INDEX IF NOT EXISTS idx_radcheck_username ON radcheck(username)",
    "CREATE TABLE IF NOT EXISTS radreply (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        username  TEXT NOT NULL DEFAULT '',
        attribute TEXT NOT NULL DEFAULT '',
        op        TEXT NOT NULL DEFAULT '=',
        value     TEXT NOT NULL DEFAULT ''
    )",
    "CREATE INDEX IF NOT EXISTS idx_radreply_username ON radreply(username)",
    "CREATE TABLE IF NOT EXISTS nas (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        nasname           TEXT NOT NULL,
        shortname         TEXT NOT NULL DEFAULT '',
        type              TEXT NOT NULL DEFAULT 'other',
        ports             INTEGER NOT NULL DEFAULT 0,
        secret            TEXT NOT NULL DEFAULT 'secret',
        server            TEXT NOT NULL DEFAULT '',
        community         TEXT NOT NULL DEFAULT '',
        description       TEXT NOT NULL DEFAULT 'RADIUS Client',
        require_ma        TEXT NOT NULL DEFAULT 'auto',
        limit_proxy_state TEXT NOT NULL DEFAULT 'auto',
        created_at        TEXT NOT NULL,
        updated_at        TEXT NOT NULL,
        deleted_at        TEXT
    )",
    // Backstop for the check-then-insert race on NAS creation.
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_nas_nasname
        ON nas(nasname) WHERE deleted_at IS NULL",
];

/// Connect to the database named by `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    info!(url = database_url, "database connected");
    Ok(pool)
}

/// Create the tables and indexes if they do not already exist.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
