use serde::{Deserialize, Serialize};

/// One portfolio entry, rendered as a timeline item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Free-form period label, e.g. "2022 - 2023".
    #[serde(deserialize_with = "super::null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Image URL. Absent or empty renders a placeholder block.
    pub image: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub technologies: Vec<String>,
    pub achievements: Option<Vec<String>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub impact: String,
}

impl Project {
    /// The image URL, if one is set and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}
