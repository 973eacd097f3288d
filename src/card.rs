//! Card records as served by HearthstoneJSON

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::fmt::Display;

/// Placeholder rendered for any field the catalog omits
pub const NOT_AVAILABLE: &str = "N/A";

/// A single card from the catalog.
///
/// The catalog is loosely typed: spells have no attack or health, some
/// entities carry no text at all. Absent fields, JSON `null` and values of an
/// unexpected type all land as `None`; anything not listed here is ignored.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub attack: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub health: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Option<i64>,
    /// Raw rules text, still containing markup
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl CardRecord {
    /// Lower-cased name for matching, empty when absent
    pub fn name_key(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lower-cased id for matching, empty when absent
    pub fn id_key(&self) -> String {
        self.id.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Decode a field, treating a value of the wrong type as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Render an optional field, falling back to `N/A`
pub fn display_or_na<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
