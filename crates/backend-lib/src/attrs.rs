// ============================
// radvault-backend-lib/src/attrs.rs
// ============================
//! Shared CRUD for the `radcheck` and `radreply` tables.
//!
//! The two tables are structurally identical, so one repository and
//! one service are parameterized by an [`AttrTable`] descriptor and
//! instantiated twice instead of duplicating the whole triplet.
//! Repository methods take an explicit executor, so callers decide
//! whether a statement runs on the pool or inside a transaction.

use crate::error::AppError;
use crate::validation;
use radvault_common::{AttrFilter, AttrResponse, CreateAttrRequest, PageParams, Paginated,
    UpdateAttrRequest};
use serde::{Deserialize, Serialize};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use tracing::{error, info};

/// Table descriptor distinguishing the two attribute tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrTable {
    /// SQL table name
    pub name: &'static str,
    /// Operator applied when a create request omits `op`
    pub default_op: &'static str,
    /// Whether create requests must carry an explicit `op`
    pub op_required: bool,
}

/// The `radcheck` table: check attributes gating authentication.
pub const RADCHECK: AttrTable = AttrTable {
    name: "radcheck",
    default_op: ":=",
    op_required: false,
};

/// The `radreply` table: attributes returned after authentication.
pub const RADREPLY: AttrTable = AttrTable {
    name: "radreply",
    default_op: "=",
    op_required: true,
};

/// A stored attribute row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq, Eq)]
pub struct AttrRow {
    pub id: i64,
    pub username: String,
    pub attribute: String,
    pub op: String,
    pub value: String,
}

impl From<AttrRow> for AttrResponse {
    fn from(row: AttrRow) -> Self {
        AttrResponse {
            id: row.id,
            username: row.username,
            attribute: row.attribute,
            op: row.op,
            value: row.value,
        }
    }
}

/// Fields of a row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewAttr {
    pub username: String,
    pub attribute: String,
    pub op: String,
    pub value: String,
}

/// Repository over one attribute table.
#[derive(Debug, Clone, Copy)]
pub struct AttrRepo {
    table: AttrTable,
}

impl AttrRepo {
    pub const fn new(table: AttrTable) -> Self {
        Self { table }
    }

    /// Insert a row, returning its assigned id.
    pub async fn insert<'e, E>(&self, db: E, row: &NewAttr) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "INSERT INTO {} (username, attribute, op, value) VALUES (?, ?, ?, ?)",
            self.table.name
        );
        let result = sqlx::query(&sql)
            .bind(&row.username)
            .bind(&row.attribute)
            .bind(&row.op)
            .bind(&row.value)
            .execute(db)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get<'e, E>(&self, db: E, id: i64) -> Result<Option<AttrRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "SELECT id, username, attribute, op, value FROM {} WHERE id = ?",
            self.table.name
        );
        sqlx::query_as::<_, AttrRow>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// All rows for a username, ordered by id so first-match password
    /// scanning is deterministic.
    pub async fn find_by_username<'e, E>(
        &self,
        db: E,
        username: &str,
    ) -> Result<Vec<AttrRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "SELECT id, username, attribute, op, value FROM {} WHERE username = ? ORDER BY id ASC",
            self.table.name
        );
        sqlx::query_as::<_, AttrRow>(&sql)
            .bind(username)
            .fetch_all(db)
            .await
    }

    pub async fn find_by_username_and_attribute<'e, E>(
        &self,
        db: E,
        username: &str,
        attribute: &str,
    ) -> Result<Option<AttrRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "SELECT id, username, attribute, op, value FROM {} \
             WHERE username = ? AND attribute = ? ORDER BY id ASC",
            self.table.name
        );
        sqlx::query_as::<_, AttrRow>(&sql)
            .bind(username)
            .bind(attribute)
            .fetch_optional(db)
            .await
    }

    /// Filtered, paginated listing. Returns the page plus the total
    /// row count before pagination.
    pub async fn list(
        &self,
        pool: &SqlitePool,
        filter: &AttrFilter,
        params: PageParams,
    ) -> Result<(Vec<AttrRow>, i64), sqlx::Error> {
        let mut count = QueryBuilder::<Sqlite>::new(format!(
            "SELECT COUNT(*) FROM {} WHERE 1=1",
            self.table.name
        ));
        let mut select = QueryBuilder::<Sqlite>::new(format!(
            "SELECT id, username, attribute, op, value FROM {} WHERE 1=1",
            self.table.name
        ));

        for builder in [&mut count, &mut select] {
            if let Some(username) = filter.username.as_deref().filter(|s| !s.is_empty()) {
                builder
                    .push(" AND username LIKE ")
                    .push_bind(format!("%{username}%"));
            }
            if let Some(attribute) = filter.attribute.as_deref().filter(|s| !s.is_empty()) {
                builder
                    .push(" AND attribute LIKE ")
                    .push_bind(format!("%{attribute}%"));
            }
        }

        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        select
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(params.page_size)
            .push(" OFFSET ")
            .push_bind(params.offset());
        let rows = select.build_query_as::<AttrRow>().fetch_all(pool).await?;

        Ok((rows, total))
    }

    pub async fn update<'e, E>(&self, db: E, row: &AttrRow) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            "UPDATE {} SET username = ?, attribute = ?, op = ?, value = ? WHERE id = ?",
            self.table.name
        );
        let result = sqlx::query(&sql)
            .bind(&row.username)
            .bind(&row.attribute)
            .bind(&row.op)
            .bind(&row.value)
            .bind(row.id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, db: E, id: i64) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.table.name);
        let result = sqlx::query(&sql).bind(id).execute(db).await?;
        Ok(result.rows_affected())
    }
}

/// CRUD service over one attribute table.
#[derive(Clone)]
pub struct AttrService {
    pool: SqlitePool,
    repo: AttrRepo,
    table: AttrTable,
}

impl AttrService {
    pub fn radcheck(pool: SqlitePool) -> Self {
        Self::new(pool, RADCHECK)
    }

    pub fn radreply(pool: SqlitePool) -> Self {
        Self::new(pool, RADREPLY)
    }

    fn new(pool: SqlitePool, table: AttrTable) -> Self {
        Self {
            pool,
            repo: AttrRepo::new(table),
            table,
        }
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.table.name))
    }

    pub async fn create(&self, req: CreateAttrRequest) -> Result<AttrResponse, AppError> {
        validation::validate_create_attr(&req, self.table.op_required)?;

        let op = match req.op.as_deref() {
            Some(op) if !op.is_empty() => op.to_string(),
            _ => self.table.default_op.to_string(),
        };
        let row = NewAttr {
            username: req.username,
            attribute: req.attribute,
            op,
            value: req.value,
        };

        info!(table = self.table.name, username = %row.username, "creating attribute");
        let id = self.repo.insert(&self.pool, &row).await.map_err(|e| {
            error!(table = self.table.name, error = %e, "failed to create attribute");
            AppError::Storage(e)
        })?;

        Ok(AttrResponse {
            id,
            username: row.username,
            attribute: row.attribute,
            op: row.op,
            value: row.value,
        })
    }

    pub async fn get(&self, id: i64) -> Result<AttrResponse, AppError> {
        let row = self.repo.get(&self.pool, id).await?;
        row.map(AttrResponse::from).ok_or_else(|| self.not_found())
    }

    pub async fn get_by_username_and_attribute(
        &self,
        username: &str,
        attribute: &str,
    ) -> Result<AttrResponse, AppError> {
        let row = self
            .repo
            .find_by_username_and_attribute(&self.pool, username, attribute)
            .await?;
        row.map(AttrResponse::from).ok_or_else(|| self.not_found())
    }

    pub async fn list(&self, filter: AttrFilter) -> Result<Paginated<AttrResponse>, AppError> {
        let params = PageParams::normalize(filter.page, filter.page_size);
        let (rows, total) = self.repo.list(&self.pool, &filter, params).await?;
        let data = rows.into_iter().map(AttrResponse::from).collect();
        Ok(Paginated::new(data, total, params))
    }

    pub async fn update(&self, id: i64, req: UpdateAttrRequest) -> Result<AttrResponse, AppError> {
        validation::validate_update_attr(&req)?;

        let mut row = self.repo.get(&self.pool, id).await?.ok_or_else(|| self.not_found())?;
        req.username.apply_to(&mut row.username);
        req.attribute.apply_to(&mut row.attribute);
        req.op.apply_to(&mut row.op);
        req.value.apply_to(&mut row.value);

        info!(table = self.table.name, id, "updating attribute");
        self.repo.update(&self.pool, &row).await?;
        Ok(row.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        info!(table = self.table.name, id, "deleting attribute");
        let affected = self.repo.delete(&self.pool, id).await?;
        if affected == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }
}
