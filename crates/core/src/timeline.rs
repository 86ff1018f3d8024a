use folio_protocol::Element;
use thiserror::Error;

use crate::model::Project;

/// Per-item cascade step, in seconds.
const CASCADE_STEP_S: f64 = 0.2;

const PLACEHOLDER_TEXT: &str = "Project Image Coming Soon";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("project {index} ({id}) has no achievements list")]
    MissingAchievements { index: usize, id: String },
}

/// Build the timeline item for the project at display position `index`.
///
/// ```text
/// div.timeline-item[role=listitem] (transition-delay: index * 0.2s)
/// └─ div.timeline-content
///    ├─ time.date
///    ├─ h3
///    ├─ p.company
///    ├─ p.description
///    ├─ div.project-image > img | div.placeholder-img
///    └─ ul.achievements[role=list] > li*
/// ```
pub fn render_timeline_item(project: &Project, index: usize) -> Result<Element, TimelineError> {
    let achievements =
        project
            .achievements
            .as_ref()
            .ok_or_else(|| TimelineError::MissingAchievements {
                index,
                id: project.id.clone(),
            })?;

    let image = match project.image_url() {
        Some(url) => Element::new("img")
            .attr("src", url)
            .attr("alt", project.title.as_str())
            .attr("loading", "lazy"),
        None => Element::new("div")
            .class("placeholder-img")
            .attr("aria-hidden", "true")
            .text(PLACEHOLDER_TEXT),
    };

    let list = achievements.iter().fold(
        Element::new("ul").class("achievements").attr("role", "list"),
        |ul, achievement| ul.child(Element::new("li").text(achievement.as_str())),
    );

    let content = Element::new("div")
        .class("timeline-content")
        .child(Element::new("time").class("date").text(project.date.as_str()))
        .child(Element::new("h3").text(project.title.as_str()))
        .child(Element::new("p").class("company").text(project.company.as_str()))
        .child(
            Element::new("p")
                .class("description")
                .text(project.description.as_str()),
        )
        .child(Element::new("div").class("project-image").child(image))
        .child(list);

    Ok(Element::new("div")
        .class("timeline-item")
        .attr("role", "listitem")
        .style("transition-delay", cascade_delay(index))
        .child(content))
}

/// Render every project in order. A failed project yields its error in
/// place; callers log it and keep the rest.
pub fn render_timeline(projects: &[Project]) -> Vec<Result<Element, TimelineError>> {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| render_timeline_item(p, i))
        .collect()
}

fn cascade_delay(index: usize) -> String {
    // Round away float noise so 3 * 0.2 prints as 0.6, not 0.6000000000000001.
    let secs = (index as f64 * CASCADE_STEP_S * 1000.0).round() / 1000.0;
    format!("{secs}s")
}
