// ============================
// radvault-backend-lib/src/auth/service.rs
// ============================
//! Credential verification and transactional credential creation.

use crate::attrs::{AttrRepo, NewAttr, RADCHECK, RADREPLY};
use crate::auth::password::{verify_password, USER_PASSWORD_ATTRIBUTE};
use crate::error::AppError;
use radvault_common::{AttrValue, AuthenticateRequest, AuthenticateResponse, CreateAuthRequest,
    CreateAuthResponse, CreatedAttr, ReplyAttr, UserAuth};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Masked value returned in place of the password row's value.
const MASKED_VALUE: &str = "***";

/// Authentication business logic over the radcheck/radreply tables.
#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
    radcheck: AttrRepo,
    radreply: AttrRepo,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            radcheck: AttrRepo::new(RADCHECK),
            radreply: AttrRepo::new(RADREPLY),
        }
    }

    /// Verify a user's credentials against their radcheck rows.
    ///
    /// Never returns an error: store failures and bad credentials are
    /// both reported through the `success`/`message` fields, so the
    /// transport cannot leak internals via status codes. The two
    /// failure messages stay distinct ("Failed to retrieve..." for a
    /// store failure vs "User not found" for zero rows).
    pub async fn authenticate(&self, req: &AuthenticateRequest) -> AuthenticateResponse {
        let rows = match self.radcheck.find_by_username(&self.pool, &req.username).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(username = %req.username, error = %e, "radcheck lookup failed");
                return AuthenticateResponse::failure(
                    "Failed to retrieve user authentication attributes",
                );
            }
        };

        if rows.is_empty() {
            return AuthenticateResponse::failure("User not found");
        }

        // Any User-Password row that verifies wins; rows are scanned
        // in id order.
        let authenticated = rows
            .iter()
            .filter(|row| row.attribute == USER_PASSWORD_ATTRIBUTE)
            .any(|row| verify_password(&req.password, &row.value));

        if !authenticated {
            return AuthenticateResponse::failure("Invalid credentials");
        }

        let attributes: Vec<AttrValue> = rows
            .iter()
            .filter(|row| row.attribute != USER_PASSWORD_ATTRIBUTE)
            .map(|row| AttrValue {
                attribute: row.attribute.clone(),
                value: row.value.clone(),
            })
            .collect();

        // A radreply failure is not fatal; authentication already
        // succeeded, the caller just gets no reply attributes.
        let replies: Vec<ReplyAttr> = match self
            .radreply
            .find_by_username(&self.pool, &req.username)
            .await
        {
            Ok(rows) => rows
                .into_iter()
                .map(|row| ReplyAttr {
                    attribute: row.attribute,
                    value: row.value,
                })
                .collect(),
            Err(e) => {
                warn!(username = %req.username, error = %e, "radreply lookup failed");
                Vec::new()
            }
        };

        info!(username = %req.username, "authentication successful");
        AuthenticateResponse {
            success: true,
            message: "Authentication successful".to_string(),
            user: Some(UserAuth {
                username: req.username.clone(),
                attributes,
            }),
            replies,
        }
    }

    /// Create a credential set inside a single transaction: one
    /// `User-Password` radcheck row, the extra check attributes, then
    /// the reply attributes. Any insert failure rolls back the lot.
    pub async fn create_auth(
        &self,
        req: &CreateAuthRequest,
    ) -> Result<CreateAuthResponse, AppError> {
        // Fail fast before opening a transaction.
        if req.username.is_empty() {
            return Err(AppError::Validation("username is required".to_string()));
        }
        if req.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }

        let mut response = CreateAuthResponse {
            username: req.username.clone(),
            password: req.password.clone(),
            attributes: Vec::new(),
            reply_attrs: Vec::new(),
        };

        let mut tx = self.pool.begin().await?;

        let password_row = NewAttr {
            username: req.username.clone(),
            attribute: USER_PASSWORD_ATTRIBUTE.to_string(),
            op: ":=".to_string(),
            value: req.password.clone(),
        };
        let id = self.radcheck.insert(&mut *tx, &password_row).await?;
        response.attributes.push(CreatedAttr {
            id,
            attribute: password_row.attribute,
            value: MASKED_VALUE.to_string(),
            op: password_row.op,
        });

        for attr in &req.attributes {
            // Already created above; a duplicate entry is skipped, not
            // an error.
            if attr.attribute == USER_PASSWORD_ATTRIBUTE {
                continue;
            }

            let row = NewAttr {
                username: req.username.clone(),
                attribute: attr.attribute.clone(),
                op: non_empty_or(attr.op.as_deref(), ":="),
                value: attr.value.clone(),
            };
            let id = self.radcheck.insert(&mut *tx, &row).await?;
            response.attributes.push(CreatedAttr {
                id,
                attribute: row.attribute,
                value: row.value,
                op: row.op,
            });
        }

        for attr in &req.reply_attrs {
            let row = NewAttr {
                username: req.username.clone(),
                attribute: attr.attribute.clone(),
                op: non_empty_or(attr.op.as_deref(), "+="),
                value: attr.value.clone(),
            };
            let id = self.radreply.insert(&mut *tx, &row).await?;
            response.reply_attrs.push(CreatedAttr {
                id,
                attribute: row.attribute,
                value: row.value,
                op: row.op,
            });
        }

        tx.commit().await?;

        info!(username = %req.username, "credentials created");
        Ok(response)
    }
}

fn non_empty_or(op: Option<&str>, default: &str) -> String {
    match op {
        Some(op) if !op.is_empty() => op.to_string(),
        _ => default.to_string(),
    }
}
