use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::project::Project;

const BUILTIN_CONTENT: &str = include_str!("../../data/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// All personal, about and portfolio data rendered by the page.
///
/// Built once and passed by reference to every populator. Fields that the
/// validator checks for presence are kept optional (or default to an empty
/// string) so that a partially filled file still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStore {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sections: Sections,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub portfolio: Portfolio,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    pub email: Option<String>,
    /// Subtitle rotator words, in display order.
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub social_links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub about: Option<About>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expertise: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    pub projects: Option<Vec<Project>>,
}

impl ContentStore {
    /// The content bundled with the crate.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(data: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Rotator words; an absent list behaves as empty.
    pub fn skills(&self) -> &[String] {
        self.personal_info.skills.as_deref().unwrap_or_default()
    }

    /// Projects in display order; an absent list behaves as empty.
    pub fn projects(&self) -> &[Project] {
        self.portfolio.projects.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_loads() {
        let content = ContentStore::builtin().unwrap();
        assert_eq!(content.personal_info.name, "Tom Schoorstra");
        assert_eq!(content.skills().len(), 5);
        assert_eq!(content.projects().len(), 3);
        assert_eq!(content.projects()[0].id, "hubspot-integration");
        assert_eq!(
            content.personal_info.social_links.get("github").map(String::as_str),
            Some("https://github.com/tomschoorstra")
        );
        let about = content.sections.about.as_ref().unwrap();
        assert_eq!(about.title, "About Me");
        assert_eq!(about.expertise.len(), 5);
    }

    #[test]
    fn missing_blocks_default() {
        let content = ContentStore::from_json("{}").unwrap();
        assert!(content.personal_info.name.is_empty());
        assert!(content.personal_info.skills.is_none());
        assert!(content.sections.about.is_none());
        assert!(content.portfolio.projects.is_none());
        assert!(content.skills().is_empty());
        assert!(content.projects().is_empty());
    }

    #[test]
    fn null_fields_load_as_empty() {
        let content = ContentStore::from_json(
            r#"{
                "personalInfo": {"name": null, "skills": null, "socialLinks": null},
                "sections": null,
                "portfolio": {"title": null, "projects": [
                    {"id": "a", "title": null, "technologies": null, "achievements": null}
                ]}
            }"#,
        )
        .unwrap();
        assert!(content.personal_info.name.is_empty());
        assert!(content.personal_info.skills.is_none());
        assert!(content.personal_info.social_links.is_empty());
        assert!(content.sections.about.is_none());
        assert!(content.portfolio.title.is_empty());
        let project = &content.projects()[0];
        assert_eq!(project.id, "a");
        assert!(project.title.is_empty());
        assert!(project.technologies.is_empty());
        assert!(project.achievements.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ContentStore::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid content JSON"));
    }
}
