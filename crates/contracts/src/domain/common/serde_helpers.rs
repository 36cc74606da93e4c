use serde::{Deserialize, Deserializer};

/// Treat `null` the same as a missing field.
///
/// Use together with `#[serde(default)]` so that both `"title": null` and an
/// absent `title` end up as the type's default (empty string, empty list).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
