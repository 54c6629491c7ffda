// ================
// common/src/lib.rs
// ================
//! Wire-level types shared by every transport surface of the
//! `RadVault` credential backend: request/response bodies for the
//! auth, radcheck, radreply and NAS endpoints, the pagination
//! envelope, and the [`Patch`] wrapper used by partial updates.

pub mod attrs;
pub mod auth;
pub mod nas;
pub mod page;
pub mod patch;

pub use attrs::{AttrFilter, AttrResponse, CreateAttrRequest, UpdateAttrRequest};
pub use auth::{
    AttrValue, AuthAttr, AuthenticateRequest, AuthenticateResponse, CreateAuthRequest,
    CreateAuthResponse, CreatedAttr, ReplyAttr, UserAuth,
};
pub use nas::{CreateNasRequest, NasFilter, NasResponse, UpdateNasRequest};
pub use page::{PageParams, Paginated};
pub use patch::Patch;
