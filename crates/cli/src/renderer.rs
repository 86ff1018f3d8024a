//! Static snapshot of the populated page slots.

use folio_core::dom::apply_commands;
use folio_core::html::element_to_html;
use folio_core::model::ContentStore;
use folio_core::populate::{self, TIMELINE_CONTAINER_ID};
use folio_core::reveal::{RevealAction, SECTION_CLASS};
use folio_core::rotator;
use folio_protocol::{DomCommand, Element, Target};

const SUBTITLE_CLASS: &str = "subtitle";

/// The fixed slots the page script fills in.
fn skeleton() -> Element {
    let slot = |tag: &str, id: &str| Element::new(tag).attr("id", id);
    Element::new("main")
        .child(
            Element::new("header").child(Element::new("p").class(SUBTITLE_CLASS)),
        )
        .child(
            Element::new("section")
                .class(SECTION_CLASS)
                .attr("id", "about")
                .child(slot("h2", populate::ABOUT_TITLE_ID))
                .child(slot("p", populate::ABOUT_CONTENT_ID)),
        )
        .child(
            Element::new("section")
                .class(SECTION_CLASS)
                .attr("id", "portfolio")
                .child(slot("h2", populate::PORTFOLIO_TITLE_ID))
                .child(slot("div", TIMELINE_CONTAINER_ID).class("timeline")),
        )
        .child(
            Element::new("footer")
                .child(slot("span", populate::FOOTER_NAME_ID))
                .child(Element::new("span").text(" \u{a9} "))
                .child(slot("span", populate::CURRENT_YEAR_ID)),
        )
}

/// Render the page as it looks once everything has been revealed and the
/// subtitle shows the first skill in full.
pub fn render_page(content: &ContentStore, year: i32) -> String {
    let mut page = skeleton();

    let render = populate::portfolio_section(content);
    for error in &render.errors {
        tracing::warn!("skipping timeline item: {error}");
    }
    let items: Vec<Element> = render
        .items
        .into_iter()
        .map(|mut item| {
            apply_commands(&mut item, RevealAction::MarkVisible.reveal());
            item
        })
        .collect();

    let mut commands = populate::personal_info(content, year);
    commands.extend(populate::about_section(content));
    commands.extend(render.title);
    commands.extend(items.into_iter().map(|element| DomCommand::AppendChild {
        target: Target::id(TIMELINE_CONTAINER_ID),
        element,
    }));

    if let Some(first) = content.skills().first() {
        commands.push(DomCommand::set_text(Target::class(SUBTITLE_CLASS), first.as_str()));
        commands.push(DomCommand::AppendChild {
            target: Target::class(SUBTITLE_CLASS),
            element: rotator::cursor(),
        });
    }

    for target in apply_commands(&mut page, commands) {
        tracing::warn!(?target, "no slot for command");
    }

    element_to_html(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_contains_populated_slots() {
        let content = ContentStore::builtin().unwrap();
        let html = render_page(&content, 2026);
        assert!(html.starts_with("<main>"));
        assert!(html.contains(r#"<h2 id="aboutTitle">About Me</h2>"#));
        assert!(html.contains(r#"<span id="currentYear">2026</span>"#));
        assert!(html.contains(r#"<span id="footerName">Tom Schoorstra</span>"#));
        assert!(!html.contains("<h1"));
        assert!(html.contains(
            r#"<p class="subtitle">Hubspot Automation Expert<span class="typing-cursor">|</span></p>"#
        ));
        assert_eq!(html.matches(r#"class="timeline-item visible""#).count(), 3);
    }
}
