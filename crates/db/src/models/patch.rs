//! Helpers for partial-update DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a patch body into `Option<Option<T>>`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// an absent key stays `None` (keep the stored value), an explicit `null`
/// becomes `Some(None)` (clear it), and a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
