// ============================
// radvault-backend-lib/src/auth/password.rs
// ============================
//! Legacy-compatible password verification.
//!
//! Stored `User-Password` values come in three accepted encodings:
//! plaintext, `{SHA}`-tagged hex SHA-1, and bare hex SHA-1. All three
//! must keep working against existing rows, so no modern KDF is
//! applied here. Each comparison is constant-time.

use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

/// The radcheck attribute holding a user's password.
pub const USER_PASSWORD_ATTRIBUTE: &str = "User-Password";

/// Constant-time comparison of two byte slices.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}

/// Verify a submitted plaintext password against a stored value.
///
/// Succeeds when the stored value equals the plaintext, the tagged
/// digest `{SHA}<hex(sha1)>`, or the bare hex digest.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    if ct_eq(plaintext.as_bytes(), stored.as_bytes()) {
        return true;
    }

    let digest = hex::encode(Sha1::digest(plaintext.as_bytes()));

    let tagged = format!("{{SHA}}{digest}");
    if ct_eq(tagged.as_bytes(), stored.as_bytes()) {
        return true;
    }

    ct_eq(digest.as_bytes(), stored.as_bytes())
}
