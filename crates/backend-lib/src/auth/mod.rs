// ============================
// radvault-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod password;
mod service;

pub use password::{verify_password, USER_PASSWORD_ATTRIBUTE};
pub use service::AuthService;
