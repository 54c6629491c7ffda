// ================
// common/src/patch.rs
// ================
//! Explicit optional-update wrapper for PUT bodies.
//!
//! A missing field deserializes to [`Patch::Unset`] (leave the stored
//! value unchanged) while a present field deserializes to
//! [`Patch::Set`], so clearing a string to `""` is expressible and
//! distinct from omitting the field.

use serde::{Deserialize, Deserializer};

/// One field of a partial-update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was absent from the request; keep the stored value.
    #[default]
    Unset,
    /// Field was present; overwrite the stored value.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// Borrow the inner value when set.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Patch::Unset => None,
            Patch::Set(v) => Some(v),
        }
    }

    /// Consume the patch, returning the inner value when set.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Unset => None,
            Patch::Set(v) => Some(v),
        }
    }

    /// Overwrite `target` when the patch carries a value.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(v) = self {
            *target = v;
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

// A present field always deserializes to `Set`; `Unset` only arises
// through `#[serde(default)]` when the field is missing.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        ports: Patch<i64>,
    }

    #[test]
    fn missing_field_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.name.is_unset());
        assert!(body.ports.is_unset());
    }

    #[test]
    fn present_field_is_set() {
        let body: Body = serde_json::from_str(r#"{"name":"router-1","ports":48}"#).unwrap();
        assert_eq!(body.name, Patch::Set("router-1".to_string()));
        assert_eq!(body.ports, Patch::Set(48));
    }

    #[test]
    fn empty_string_clears_rather_than_skips() {
        let body: Body = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(body.name, Patch::Set(String::new()));

        let mut stored = "old".to_string();
        body.name.apply_to(&mut stored);
        assert_eq!(stored, "");
    }

    #[test]
    fn unset_leaves_target_unchanged() {
        let patch: Patch<String> = Patch::Unset;
        let mut stored = "keep".to_string();
        patch.apply_to(&mut stored);
        assert_eq!(stored, "keep");
    }
}
