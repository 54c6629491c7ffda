// ============================
// radvault-backend-lib/src/nas.rs
// ============================
//! NAS registry: repository and service over the `nas` table.
//!
//! NAS rows are soft-deleted; every read path filters on
//! `deleted_at IS NULL`. `nasname` uniqueness is pre-checked for a
//! fast failure, with the partial unique index as the real guarantee.

use crate::error::AppError;
use crate::validation;
use chrono::{DateTime, Utc};
use radvault_common::{CreateNasRequest, NasFilter, NasResponse, PageParams, Paginated,
    UpdateNasRequest};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use tracing::{error, info, warn};

const NAS_COLUMNS: &str = "id, nasname, shortname, type, ports, secret, server, community, \
     description, require_ma, limit_proxy_state, created_at, updated_at, deleted_at";

/// A stored NAS row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NasRow {
    pub id: i64,
    pub nasname: String,
    pub shortname: String,
    #[sqlx(rename = "type")]
    pub nas_type: String,
    pub ports: i64,
    pub secret: String,
    pub server: String,
    pub community: String,
    pub description: String,
    pub require_ma: String,
    pub limit_proxy_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<NasRow> for NasResponse {
    fn from(row: NasRow) -> Self {
        NasResponse {
            id: row.id,
            nasname: row.nasname,
            shortname: row.shortname,
            nas_type: row.nas_type,
            ports: row.ports,
            secret: row.secret,
            server: row.server,
            community: row.community,
            description: row.description,
            require_ma: row.require_ma,
            limit_proxy_state: row.limit_proxy_state,
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

/// Repository over the `nas` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NasRepo;

impl NasRepo {
    /// Insert a row, returning its assigned id.
    pub async fn insert<'e, E>(&self, db: E, row: &NasRow) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO nas (nasname, shortname, type, ports, secret, server, community, \
             description, require_ma, limit_proxy_state, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.nasname)
        .bind(&row.shortname)
        .bind(&row.nas_type)
        .bind(row.ports)
        .bind(&row.secret)
        .bind(&row.server)
        .bind(&row.community)
        .bind(&row.description)
        .bind(&row.require_ma)
        .bind(&row.limit_proxy_state)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(db)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Fetch a live row by id.
    pub async fn get<'e, E>(&self, db: E, id: i64) -> Result<Option<NasRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("SELECT {NAS_COLUMNS} FROM nas WHERE id = ? AND deleted_at IS NULL");
        sqlx::query_as::<_, NasRow>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Fetch a live row by its unique name.
    pub async fn find_by_nasname<'e, E>(
        &self,
        db: E,
        nasname: &str,
    ) -> Result<Option<NasRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql =
            format!("SELECT {NAS_COLUMNS} FROM nas WHERE nasname = ? AND deleted_at IS NULL");
        sqlx::query_as::<_, NasRow>(&sql)
            .bind(nasname)
            .fetch_optional(db)
            .await
    }

    /// Filtered, paginated listing over live rows.
    pub async fn list(
        &self,
        pool: &SqlitePool,
        filter: &NasFilter,
        params: PageParams,
    ) -> Result<(Vec<NasRow>, i64), sqlx::Error> {
        let mut count =
            QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM nas WHERE deleted_at IS NULL");
        let mut select = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {NAS_COLUMNS} FROM nas WHERE deleted_at IS NULL"
        ));

        for builder in [&mut count, &mut select] {
            for (column, value) in [
                ("nasname", filter.nasname.as_deref()),
                ("shortname", filter.shortname.as_deref()),
                ("type", filter.nas_type.as_deref()),
                ("description", filter.description.as_deref()),
            ] {
                if let Some(value) = value.filter(|s| !s.is_empty()) {
                    builder
                        .push(format!(" AND {column} LIKE "))
                        .push_bind(format!("%{value}%"));
                }
            }
        }

        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        select
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(params.page_size)
            .push(" OFFSET ")
            .push_bind(params.offset());
        let rows = select.build_query_as::<NasRow>().fetch_all(pool).await?;

        Ok((rows, total))
    }

    pub async fn update<'e, E>(&self, db: E, row: &NasRow) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE nas SET nasname = ?, shortname = ?, type = ?, ports = ?, secret = ?, \
             server = ?, community = ?, description = ?, require_ma = ?, \
             limit_proxy_state = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&row.nasname)
        .bind(&row.shortname)
        .bind(&row.nas_type)
        .bind(row.ports)
        .bind(&row.secret)
        .bind(&row.server)
        .bind(&row.community)
        .bind(&row.description)
        .bind(&row.require_ma)
        .bind(&row.limit_proxy_state)
        .bind(row.updated_at)
        .bind(row.id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    /// Soft-delete a live row by stamping `deleted_at`.
    pub async fn soft_delete<'e, E>(
        &self,
        db: E,
        id: i64,
        deleted_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result =
            sqlx::query("UPDATE nas SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(deleted_at)
                .bind(id)
                .execute(db)
                .await?;
        Ok(result.rows_affected())
    }
}

/// NAS registry service.
#[derive(Clone)]
pub struct NasService {
    pool: SqlitePool,
    repo: NasRepo,
}

impl NasService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            repo: NasRepo,
        }
    }

    pub async fn create(&self, req: CreateNasRequest) -> Result<NasResponse, AppError> {
        validation::validate_create_nas(&req)?;

        info!(nasname = %req.nasname, "creating NAS");

        // Fast-fail pre-check; the unique partial index is the actual
        // correctness guarantee under concurrent creates.
        if self
            .repo
            .find_by_nasname(&self.pool, &req.nasname)
            .await?
            .is_some()
        {
            warn!(nasname = %req.nasname, "nasname already exists");
            return Err(AppError::Conflict("nasname already exists".to_string()));
        }

        let now = Utc::now();
        let mut row = NasRow {
            id: 0,
            nasname: req.nasname,
            shortname: req.shortname.unwrap_or_default(),
            nas_type: req.nas_type.unwrap_or_else(|| "other".to_string()),
            ports: req.ports.unwrap_or(0),
            secret: req.secret,
            server: req.server.unwrap_or_default(),
            community: req.community.unwrap_or_default(),
            description: req
                .description
                .unwrap_or_else(|| "RADIUS Client".to_string()),
            require_ma: req.require_ma.unwrap_or_else(|| "auto".to_string()),
            limit_proxy_state: req.limit_proxy_state.unwrap_or_else(|| "auto".to_string()),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        row.id = self.repo.insert(&self.pool, &row).await.map_err(|e| {
            error!(error = %e, "failed to create NAS");
            AppError::Storage(e)
        })?;

        info!(id = row.id, "NAS created");
        Ok(row.into())
    }

    pub async fn get(&self, id: i64) -> Result<NasResponse, AppError> {
        let row = self.repo.get(&self.pool, id).await?;
        row.map(NasResponse::from)
            .ok_or_else(|| AppError::NotFound("nas not found".to_string()))
    }

    pub async fn list(&self, filter: NasFilter) -> Result<Paginated<NasResponse>, AppError> {
        let params = PageParams::normalize(filter.page, filter.page_size);
        let (rows, total) = self.repo.list(&self.pool, &filter, params).await?;
        let data = rows.into_iter().map(NasResponse::from).collect();
        Ok(Paginated::new(data, total, params))
    }

    pub async fn update(&self, id: i64, req: UpdateNasRequest) -> Result<NasResponse, AppError> {
        validation::validate_update_nas(&req)?;

        let mut row = self
            .repo
            .get(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("nas not found".to_string()))?;

        req.nasname.apply_to(&mut row.nasname);
        req.shortname.apply_to(&mut row.shortname);
        req.nas_type.apply_to(&mut row.nas_type);
        req.ports.apply_to(&mut row.ports);
        req.secret.apply_to(&mut row.secret);
        req.server.apply_to(&mut row.server);
        req.community.apply_to(&mut row.community);
        req.description.apply_to(&mut row.description);
        req.require_ma.apply_to(&mut row.require_ma);
        req.limit_proxy_state.apply_to(&mut row.limit_proxy_state);
        row.updated_at = Utc::now();

        info!(id, "updating NAS");
        self.repo.update(&self.pool, &row).await?;
        Ok(row.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        info!(id, "deleting NAS");
        let affected = self.repo.soft_delete(&self.pool, id, Utc::now()).await?;
        if affected == 0 {
            return Err(AppError::NotFound("nas not found".to_string()));
        }
        Ok(())
    }
}
