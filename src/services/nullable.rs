//! Serde helper shared by the wire DTOs

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the field's zero value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
