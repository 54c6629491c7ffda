// ============================
// radvault-backend-lib/src/validation.rs
// ============================
//! Request validation, applied at the transport boundary before a
//! request reaches a service. Field limits follow the FreeRADIUS SQL
//! schema column sizes.

use crate::error::AppError;
use radvault_common::{AuthenticateRequest, CreateAttrRequest, CreateNasRequest, Patch,
    UpdateAttrRequest, UpdateNasRequest};
use thiserror::Error;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MAX_ATTRIBUTE_LEN: usize = 64;
pub const MAX_OP_LEN: usize = 2;
pub const MAX_VALUE_LEN: usize = 253;

pub const MAX_NASNAME_LEN: usize = 128;
pub const MAX_SHORTNAME_LEN: usize = 32;
pub const MAX_NAS_TYPE_LEN: usize = 30;
pub const MAX_SECRET_LEN: usize = 60;
pub const MAX_SERVER_LEN: usize = 64;
pub const MAX_COMMUNITY_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_FLAG_LEN: usize = 4;

/// Possible validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type for validation operations
pub type ValidationResult = Result<(), ValidationError>;

fn require(value: &str, field: &'static str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn max_len(value: &str, field: &'static str, max: usize) -> ValidationResult {
    if value.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn max_len_opt(value: &Option<String>, field: &'static str, max: usize) -> ValidationResult {
    match value {
        Some(v) => max_len(v, field, max),
        None => Ok(()),
    }
}

fn max_len_patch(value: &Patch<String>, field: &'static str, max: usize) -> ValidationResult {
    match value.as_ref() {
        Some(v) => max_len(v, field, max),
        None => Ok(()),
    }
}

/// Validate an authentication request.
pub fn validate_authenticate(req: &AuthenticateRequest) -> ValidationResult {
    require(&req.username, "username")?;
    max_len(&req.username, "username", MAX_USERNAME_LEN)?;
    require(&req.password, "password")?;
    max_len(&req.password, "password", MAX_VALUE_LEN)?;
    Ok(())
}

/// Validate a radcheck/radreply create request. radreply requires an
/// explicit operator; radcheck defaults it later.
pub fn validate_create_attr(req: &CreateAttrRequest, op_required: bool) -> ValidationResult {
    require(&req.username, "username")?;
    max_len(&req.username, "username", MAX_USERNAME_LEN)?;
    require(&req.attribute, "attribute")?;
    max_len(&req.attribute, "attribute", MAX_ATTRIBUTE_LEN)?;
    if op_required && req.op.as_deref().unwrap_or("").is_empty() {
        return Err(ValidationError::Required("op"));
    }
    max_len_opt(&req.op, "op", MAX_OP_LEN)?;
    require(&req.value, "value")?;
    max_len(&req.value, "value", MAX_VALUE_LEN)?;
    Ok(())
}

/// Validate a radcheck/radreply partial update.
pub fn validate_update_attr(req: &UpdateAttrRequest) -> ValidationResult {
    max_len_patch(&req.username, "username", MAX_USERNAME_LEN)?;
    max_len_patch(&req.attribute, "attribute", MAX_ATTRIBUTE_LEN)?;
    max_len_patch(&req.op, "op", MAX_OP_LEN)?;
    max_len_patch(&req.value, "value", MAX_VALUE_LEN)?;
    Ok(())
}

/// Validate a NAS create request.
pub fn validate_create_nas(req: &CreateNasRequest) -> ValidationResult {
    require(&req.nasname, "nasname")?;
    max_len(&req.nasname, "nasname", MAX_NASNAME_LEN)?;
    max_len_opt(&req.shortname, "shortname", MAX_SHORTNAME_LEN)?;
    max_len_opt(&req.nas_type, "type", MAX_NAS_TYPE_LEN)?;
    require(&req.secret, "secret")?;
    max_len(&req.secret, "secret", MAX_SECRET_LEN)?;
    max_len_opt(&req.server, "server", MAX_SERVER_LEN)?;
    max_len_opt(&req.community, "community", MAX_COMMUNITY_LEN)?;
    max_len_opt(&req.description, "description", MAX_DESCRIPTION_LEN)?;
    max_len_opt(&req.require_ma, "require_ma", MAX_FLAG_LEN)?;
    max_len_opt(&req.limit_proxy_state, "limit_proxy_state", MAX_FLAG_LEN)?;
    Ok(())
}

/// Validate a NAS partial update.
pub fn validate_update_nas(req: &UpdateNasRequest) -> ValidationResult {
    max_len_patch(&req.nasname, "nasname", MAX_NASNAME_LEN)?;
    max_len_patch(&req.shortname, "shortname", MAX_SHORTNAME_LEN)?;
    max_len_patch(&req.nas_type, "type", MAX_NAS_TYPE_LEN)?;
    max_len_patch(&req.secret, "secret", MAX_SECRET_LEN)?;
    max_len_patch(&req.server, "server", MAX_SERVER_LEN)?;
    max_len_patch(&req.community, "community", MAX_COMMUNITY_LEN)?;
    max_len_patch(&req.description, "description", MAX_DESCRIPTION_LEN)?;
    max_len_patch(&req.require_ma, "require_ma", MAX_FLAG_LEN)?;
    max_len_patch(&req.limit_proxy_state, "limit_proxy_state", MAX_FLAG_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radvault_common::Patch;

    fn attr_request() -> CreateAttrRequest {
        CreateAttrRequest {
            username: "alice".to_string(),
            attribute: "Framed-IP-Address".to_string(),
            op: Some(":=".to_string()),
            value: "10.0.0.5".to_string(),
        }
    }

    #[test]
    fn test_validate_authenticate() {
        let req = AuthenticateRequest {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        };
        assert!(validate_authenticate(&req).is_ok());

        let empty_user = AuthenticateRequest {
            username: String::new(),
            password: "secret123".to_string(),
        };
        assert!(matches!(
            validate_authenticate(&empty_user),
            Err(ValidationError::Required("username"))
        ));

        let long_user = AuthenticateRequest {
            username: "a".repeat(MAX_USERNAME_LEN + 1),
            password: "secret123".to_string(),
        };
        assert!(matches!(
            validate_authenticate(&long_user),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_create_attr() {
        assert!(validate_create_attr(&attr_request(), false).is_ok());

        // radreply path requires an operator
        let mut no_op = attr_request();
        no_op.op = None;
        assert!(validate_create_attr(&no_op, false).is_ok());
        assert!(matches!(
            validate_create_attr(&no_op, true),
            Err(ValidationError::Required("op"))
        ));

        let mut long_op = attr_request();
        long_op.op = Some(":==".to_string());
        assert!(matches!(
            validate_create_attr(&long_op, false),
            Err(ValidationError::TooLong { field: "op", .. })
        ));

        let mut long_value = attr_request();
        long_value.value = "v".repeat(MAX_VALUE_LEN + 1);
        assert!(validate_create_attr(&long_value, false).is_err());
    }

    #[test]
    fn test_validate_update_attr_checks_only_set_fields() {
        let req = UpdateAttrRequest {
            value: Patch::Set("v".repeat(MAX_VALUE_LEN)),
            ..Default::default()
        };
        assert!(validate_update_attr(&req).is_ok());

        let req = UpdateAttrRequest {
            value: Patch::Set("v".repeat(MAX_VALUE_LEN + 1)),
            ..Default::default()
        };
        assert!(validate_update_attr(&req).is_err());
    }

    #[test]
    fn test_validate_create_nas() {
        let req = CreateNasRequest {
            nasname: "192.168.1.1".to_string(),
            shortname: None,
            nas_type: None,
            ports: None,
            secret: "s3cret".to_string(),
            server: None,
            community: None,
            description: None,
            require_ma: None,
            limit_proxy_state: None,
        };
        assert!(validate_create_nas(&req).is_ok());

        let mut missing_secret = req.clone();
        missing_secret.secret = String::new();
        assert!(matches!(
            validate_create_nas(&missing_secret),
            Err(ValidationError::Required("secret"))
        ));

        let mut long_flag = req;
        long_flag.require_ma = Some("never".to_string());
        assert!(validate_create_nas(&long_flag).is_err());
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let app_err: AppError = ValidationError::Required("username").into();
        assert_eq!(app_err.to_string(), "username is required");
        assert_eq!(
            app_err.status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
