//! Integration test: populate a page skeleton from the bundled content, then
//! drive the reveal tracker and the subtitle rotator the way the browser
//! bridge does.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::dom::apply_commands;
use folio_core::html::element_to_html;
use folio_core::populate::{about_section, personal_info, portfolio_section};
use folio_core::reveal::{RevealAction, RevealTracker};
use folio_core::rotator::{self, TextRotator, TextSink};
use folio_core::schedule::ManualScheduler;
use folio_core::validate::validate;
use folio_core::{ContentStore, SiteConfig};
use folio_protocol::{DomCommand, Element, Target};

fn skeleton() -> Element {
    let slot = |tag: &str, id: &str| Element::new(tag).attr("id", id);
    Element::new("body")
        .child(
            Element::new("section")
                .class("section")
                .attr("id", "about")
                .child(slot("h2", "aboutTitle"))
                .child(slot("p", "aboutContent")),
        )
        .child(
            Element::new("section")
                .class("section")
                .attr("id", "portfolio")
                .child(slot("h2", "portfolioTitle"))
                .child(slot("div", "timelineContainer").class("timeline")),
        )
        .child(
            Element::new("footer")
                .child(slot("span", "footerName"))
                .child(slot("span", "currentYear")),
        )
}

fn by_id<'a>(root: &'a Element, id: &str) -> &'a Element {
    root.find(&|e| e.attribute("id") == Some(id))
        .unwrap_or_else(|| panic!("no element #{id}"))
}

#[test]
fn populates_bundled_content() {
    let content = ContentStore::builtin().expect("bundled content should parse");
    assert!(validate(&content).is_empty());

    let mut page = skeleton();
    let portfolio = portfolio_section(&content);
    assert!(portfolio.errors.is_empty());

    let mut commands = personal_info(&content, 2026);
    commands.extend(about_section(&content));
    commands.extend(portfolio.into_commands());
    let missing = apply_commands(&mut page, commands);
    assert!(missing.is_empty(), "unresolved targets: {missing:?}");

    assert_eq!(by_id(&page, "footerName").text_content(), "Tom Schoorstra");
    assert_eq!(by_id(&page, "currentYear").text_content(), "2026");
    assert_eq!(by_id(&page, "aboutTitle").text_content(), "About Me");
    assert!(by_id(&page, "aboutContent")
        .text_content()
        .starts_with("As an Automation Specialist"));
    assert_eq!(
        by_id(&page, "portfolioTitle").text_content(),
        "Portfolio Timeline"
    );

    let container = by_id(&page, "timelineContainer");
    let items: Vec<&Element> = container.child_elements().collect();
    assert_eq!(items.len(), content.projects().len());
    for (item, project) in items.iter().zip(content.projects()) {
        assert!(item.has_class("timeline-item"));
        let h3 = item.find(&|e| e.tag == "h3").expect("title");
        assert_eq!(h3.text_content(), project.title);
        let lis = item
            .find(&|e| e.has_class("achievements"))
            .expect("achievements list")
            .child_elements()
            .count();
        assert_eq!(Some(lis), project.achievements.as_ref().map(Vec::len));
        assert!(item.find(&|e| e.has_class("placeholder-img")).is_some());
    }

    let html = element_to_html(&page);
    assert!(html.contains("HubSpot&#39;s API"));
    assert!(html.contains(r#"style="transition-delay: 0.4s;""#));
}

#[test]
fn broken_project_is_skipped_and_others_render() {
    let content = ContentStore::from_json(
        r#"{
            "portfolio": {"title": "Work", "projects": [
                {"id": "a", "title": "A", "achievements": ["x"]},
                {"id": "b", "title": "B"},
                {"id": "c", "title": "C", "achievements": []}
            ]}
        }"#,
    )
    .expect("valid json");
    let render = portfolio_section(&content);
    assert_eq!(render.errors.len(), 1);
    assert_eq!(
        render.errors[0].to_string(),
        "project 1 (b) has no achievements list"
    );
    let titles: Vec<String> = render
        .items
        .iter()
        .filter_map(|item| item.find(&|e| e.tag == "h3"))
        .map(Element::text_content)
        .collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn timeline_items_reveal_once() {
    let content = ContentStore::builtin().expect("bundled content should parse");
    let mut items = portfolio_section(&content).items;
    let mut tracker = RevealTracker::new(RevealAction::MarkVisible);
    for key in 0..items.len() {
        assert!(tracker.observe(key).is_empty());
    }

    // item 0 enters, leaves and enters again; item 2 enters once
    let notifications = [(0, true), (0, false), (2, true), (0, true), (2, true)];
    for (key, intersecting) in notifications {
        if let Some(cmds) = tracker.notify(&key, intersecting) {
            apply_commands(&mut items[key], cmds);
        }
    }

    let visible: Vec<bool> = items.iter().map(|i| i.has_class("visible")).collect();
    assert_eq!(visible, vec![true, false, true]);
    assert_eq!(items[0].classes, vec!["timeline-item", "visible"]);
    assert!(tracker.is_watching(&1));
}

#[test]
fn overlapping_observers_keep_their_own_keys() {
    let mut section = Element::new("section").class("section");
    let mut item = Element::new("div").class("timeline-item");
    let mut sections = RevealTracker::new(RevealAction::FadeIn);
    let mut timeline = RevealTracker::new(RevealAction::MarkVisible);

    // both observers number their first element 0
    apply_commands(&mut section, sections.observe(0usize));
    apply_commands(&mut item, timeline.observe(0usize));

    let cmds = sections.notify(&0, true).expect("section reveal");
    apply_commands(&mut section, cmds);
    assert_eq!(section.style_value("opacity"), Some("1"));
    assert!(!item.has_class("visible"));
    assert!(timeline.is_watching(&0));

    let cmds = timeline.notify(&0, true).expect("item reveal");
    apply_commands(&mut item, cmds);
    assert!(item.has_class("visible"));
    assert_eq!(item.style_value("opacity"), None);
}

#[test]
fn section_fade_in_commands() {
    let mut section = Element::new("section").class("section");
    let mut tracker = RevealTracker::new(RevealAction::FadeIn);
    apply_commands(&mut section, tracker.observe("about"));
    assert_eq!(section.style_value("opacity"), Some("0"));
    assert_eq!(section.style_value("transform"), Some("translateY(20px)"));

    let cmds = tracker.notify(&"about", true).expect("first reveal");
    apply_commands(&mut section, cmds);
    assert_eq!(section.style_value("opacity"), Some("1"));
    assert_eq!(section.style_value("transform"), Some("translateY(0)"));
    assert!(tracker.notify(&"about", true).is_none());
}

struct Subtitle {
    element: RefCell<Element>,
    history: RefCell<Vec<String>>,
}

impl TextSink for Subtitle {
    type Error = String;

    fn show(&self, text: &str) -> Result<(), String> {
        let mut el = self.element.borrow_mut();
        apply_commands(&mut el, vec![DomCommand::set_text(Target::Subject, text)]);
        el.children.push(rotator::cursor().into());
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn failed(&self, error: String) {
        panic!("rotation failed: {error}");
    }
}

#[test]
fn subtitle_cycles_through_all_skills() {
    let content = ContentStore::builtin().expect("bundled content should parse");
    let config = SiteConfig::default();
    let skills = content.skills().to_vec();
    let subtitle = TextRotator::new(skills.clone(), config.rotator).expect("skills present");

    let scheduler = Rc::new(ManualScheduler::new());
    let sink = Rc::new(Subtitle {
        element: RefCell::new(Element::new("p").class("subtitle")),
        history: RefCell::new(Vec::new()),
    });
    rotator::spawn(subtitle, sink.clone(), scheduler.clone());

    // Each word: n typing ticks, n deleting ticks.
    let ticks: usize = skills.iter().map(|w| 2 * w.chars().count()).sum();
    for _ in 0..ticks {
        assert!(scheduler.run_next());
    }

    let history = sink.history.borrow();
    for word in &skills {
        assert!(history.contains(word), "{word} was never fully shown");
    }
    // Back at the first word after the full cycle.
    assert_eq!(history.last().map(String::as_str), Some("H"));

    let el = sink.element.borrow();
    assert_eq!(el.text_content(), "H|");
    assert!(el.child_elements().any(|c| c.has_class("typing-cursor")));

    // Rotation never ends on its own.
    assert_eq!(scheduler.pending(), 1);
    assert!(scheduler.next_due_in() <= Some(Duration::from_millis(100)));
}
