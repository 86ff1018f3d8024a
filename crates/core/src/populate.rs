//! Content Store → DOM commands for the fixed page slots.

use folio_protocol::{DomCommand, Element, Target};

use crate::model::ContentStore;
use crate::timeline::{TimelineError, render_timeline};

pub const FOOTER_NAME_ID: &str = "footerName";
pub const CURRENT_YEAR_ID: &str = "currentYear";
pub const ABOUT_TITLE_ID: &str = "aboutTitle";
pub const ABOUT_CONTENT_ID: &str = "aboutContent";
pub const PORTFOLIO_TITLE_ID: &str = "portfolioTitle";
pub const TIMELINE_CONTAINER_ID: &str = "timelineContainer";

/// Footer name and copyright year.
pub fn personal_info(content: &ContentStore, year: i32) -> Vec<DomCommand> {
    vec![
        DomCommand::set_text(
            Target::id(FOOTER_NAME_ID),
            content.personal_info.name.as_str(),
        ),
        DomCommand::set_text(Target::id(CURRENT_YEAR_ID), year.to_string()),
    ]
}

/// About title and body, each only when non-empty.
pub fn about_section(content: &ContentStore) -> Vec<DomCommand> {
    let Some(about) = &content.sections.about else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(2);
    if !about.title.is_empty() {
        commands.push(DomCommand::set_text(
            Target::id(ABOUT_TITLE_ID),
            about.title.as_str(),
        ));
    }
    if !about.content.is_empty() {
        commands.push(DomCommand::set_text(
            Target::id(ABOUT_CONTENT_ID),
            about.content.as_str(),
        ));
    }
    commands
}

/// Result of rendering the portfolio section.
#[derive(Debug, Clone, Default)]
pub struct PortfolioRender {
    /// Title update, if the title is set.
    pub title: Option<DomCommand>,
    /// Timeline items to append to the container, in display order.
    pub items: Vec<Element>,
    /// Projects that were skipped.
    pub errors: Vec<TimelineError>,
}

impl PortfolioRender {
    /// Flatten into commands addressed at the page slots.
    pub fn into_commands(self) -> Vec<DomCommand> {
        let container = Target::id(TIMELINE_CONTAINER_ID);
        self.title
            .into_iter()
            .chain(self.items.into_iter().map(|element| DomCommand::AppendChild {
                target: container.clone(),
                element,
            }))
            .collect()
    }
}

pub fn portfolio_section(content: &ContentStore) -> PortfolioRender {
    let title = (!content.portfolio.title.is_empty()).then(|| {
        DomCommand::set_text(
            Target::id(PORTFOLIO_TITLE_ID),
            content.portfolio.title.as_str(),
        )
    });

    let mut items = Vec::new();
    let mut errors = Vec::new();
    for result in render_timeline(content.projects()) {
        match result {
            Ok(item) => items.push(item),
            Err(e) => errors.push(e),
        }
    }

    PortfolioRender {
        title,
        items,
        errors,
    }
}
