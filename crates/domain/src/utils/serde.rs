//! Serialization helpers for backend records
//!
//! Used from `#[serde(with = ...)]` attributes on the view-models in
//! [`crate::types`].

use serde::{Deserialize, Deserializer, Serializer};

/// Record id that may arrive as `id`, `_id`, or both
///
/// Backends that serialize virtual fields send both keys for the same
/// record, which a plain `#[serde(alias)]` rejects as a duplicate field. The
/// field must be flattened so both keys reach the helper.
///
/// # Usage
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(flatten, with = "crmdesk_domain::utils::serde::record_id")]
///     id: String,
/// }
///
/// let both: Example = serde_json::from_str(r#"{"_id":"a1","id":"a1"}"#).unwrap();
/// assert_eq!(both.id, "a1");
/// ```
pub mod record_id {
    use serde::ser::SerializeMap;

    use super::*;

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    #[derive(Deserialize)]
    struct Keys {
        #[serde(default)]
        id: Option<String>,
        #[serde(default, rename = "_id")]
        object_id: Option<String>,
    }

    /// Write the id back under `id`
    pub fn serialize<S>(id: &str, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("id", id)?;
        map.end()
    }

    /// Read `id`, falling back to `_id` when `id` is absent or blank
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = Keys::deserialize(deserializer)?;
        keys.id
            .filter(|id| !id.is_empty())
            .or(keys.object_id)
            .ok_or_else(|| serde::de::Error::missing_field("id"))
    }
}
