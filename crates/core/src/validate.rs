//! Advisory presence checks over a [`ContentStore`].
//!
//! Validation never fails and never blocks rendering: it returns one
//! [`Diagnostic`] per missing required field and leaves logging to the
//! caller.

use std::fmt;

use crate::model::{ContentStore, Project};

/// A missing required field, displayed as the console message for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `personalInfo.<field>` or `sections.about.<field>`.
    MissingField { path: String },
    /// The whole `sections.about` block is absent.
    MissingAboutSection,
    /// `portfolio.projects` is absent.
    ProjectsNotAList,
    MissingProjectField { index: usize, field: &'static str },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingField { path } => write!(f, "Missing required field: {path}"),
            Diagnostic::MissingAboutSection => f.write_str("Missing about section"),
            Diagnostic::ProjectsNotAList => f.write_str("Portfolio projects must be an array"),
            Diagnostic::MissingProjectField { index, field } => {
                write!(f, "Missing required field in project {index}: {field}")
            }
        }
    }
}

/// Walk the required field paths and report each one that is empty or
/// absent. An empty list counts as present.
pub fn validate(content: &ContentStore) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    let info = &content.personal_info;
    let personal: [(&str, bool); 4] = [
        ("name", !info.name.is_empty()),
        ("location", !info.location.is_empty()),
        ("title", !info.title.is_empty()),
        ("skills", info.skills.is_some()),
    ];
    for (field, present) in personal {
        if !present {
            out.push(Diagnostic::MissingField {
                path: format!("personalInfo.{field}"),
            });
        }
    }

    match &content.sections.about {
        None => out.push(Diagnostic::MissingAboutSection),
        Some(about) => {
            for (field, value) in [("title", &about.title), ("content", &about.content)] {
                if value.is_empty() {
                    out.push(Diagnostic::MissingField {
                        path: format!("sections.about.{field}"),
                    });
                }
            }
        }
    }

    match &content.portfolio.projects {
        None => out.push(Diagnostic::ProjectsNotAList),
        Some(projects) => {
            for (index, project) in projects.iter().enumerate() {
                for field in missing_project_fields(project) {
                    out.push(Diagnostic::MissingProjectField { index, field });
                }
            }
        }
    }

    out
}

fn missing_project_fields(project: &Project) -> Vec<&'static str> {
    let checks = [
        ("id", !project.id.is_empty()),
        ("date", !project.date.is_empty()),
        ("title", !project.title.is_empty()),
        ("company", !project.company.is_empty()),
        ("description", !project.description.is_empty()),
        ("achievements", project.achievements.is_some()),
    ];
    checks
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_clean() {
        let content = ContentStore::builtin().unwrap();
        assert!(validate(&content).is_empty());
    }

    #[test]
    fn empty_store_reports_each_top_level_gap_once() {
        let content = ContentStore::from_json("{}").unwrap();
        let messages: Vec<String> = validate(&content).iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required field: personalInfo.name",
                "Missing required field: personalInfo.location",
                "Missing required field: personalInfo.title",
                "Missing required field: personalInfo.skills",
                "Missing about section",
                "Portfolio projects must be an array",
            ]
        );
    }

    #[test]
    fn one_diagnostic_per_missing_project_field() {
        let content = ContentStore::from_json(
            r#"{
                "personalInfo": {"name": "A", "location": "B", "title": "C", "skills": []},
                "sections": {"about": {"title": "", "content": "text"}},
                "portfolio": {"projects": [
                    {"id": "a", "date": "2020", "title": "T", "company": "Co", "description": "D", "achievements": []},
                    {"id": "b", "title": "T2", "company": "Co"}
                ]}
            }"#,
        )
        .unwrap();
        let diagnostics = validate(&content);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::MissingField {
                    path: "sections.about.title".into()
                },
                Diagnostic::MissingProjectField {
                    index: 1,
                    field: "date"
                },
                Diagnostic::MissingProjectField {
                    index: 1,
                    field: "description"
                },
                Diagnostic::MissingProjectField {
                    index: 1,
                    field: "achievements"
                },
            ]
        );
        assert_eq!(
            diagnostics[1].to_string(),
            "Missing required field in project 1: date"
        );
    }

    #[test]
    fn null_fields_report_like_missing_ones() {
        let content = ContentStore::from_json(
            r#"{
                "personalInfo": {"name": null, "location": "B", "title": "C", "skills": ["x"]},
                "sections": {"about": {"title": "About", "content": "text"}},
                "portfolio": {"projects": [
                    {"id": "a", "date": "2020", "title": null, "company": "Co", "description": "D", "achievements": ["y"]}
                ]}
            }"#,
        )
        .unwrap();
        assert_eq!(
            validate(&content),
            vec![
                Diagnostic::MissingField {
                    path: "personalInfo.name".into()
                },
                Diagnostic::MissingProjectField {
                    index: 0,
                    field: "title"
                },
            ]
        );
    }
}
