pub mod content;
pub mod project;

use serde::{Deserialize, Deserializer};

pub use content::{About, ContentError, ContentStore, PersonalInfo, Portfolio, Sections};
pub use project::Project;

/// Reads an explicit `null` as the field's default, the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
