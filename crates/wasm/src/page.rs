use std::rc::Rc;

use folio_core::populate::{self, TIMELINE_CONTAINER_ID};
use folio_core::reveal::{RevealAction, SECTION_CLASS};
use folio_core::rotator::{self, TextRotator, TextSink};
use folio_core::schedule::Scheduler;
use folio_core::validate::validate;
use folio_core::{ContentStore, SiteConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::chrome::Chrome;
use crate::reveal::RevealObserver;
use crate::scheduler::TimeoutScheduler;
use crate::{dom, handle_error, report};

const SUBTITLE_SELECTOR: &str = ".subtitle";

/// Everything that must stay alive for the page's behaviors to keep
/// working.
pub struct Page {
    _sections: Option<RevealObserver>,
    _timeline: Option<RevealObserver>,
    _chrome: Option<Chrome>,
    _scheduler: Rc<dyn Scheduler>,
}

impl Page {
    /// Validate and render the content, then attach observers, the subtitle
    /// rotator and the navigation listeners. Each step reports its own
    /// failure and the rest carry on.
    pub fn mount(
        window: &Window,
        document: &Document,
        content: &ContentStore,
        config: &SiteConfig,
    ) -> Self {
        for diagnostic in validate(content) {
            web_sys::console::error_1(&diagnostic.to_string().into());
        }

        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler::new(window.clone()));

        report(
            "personal info population",
            dom::apply_all(document, None, &populate::personal_info(content, current_year())),
        );
        report(
            "about section population",
            dom::apply_all(document, None, &populate::about_section(content)),
        );

        let timeline = RevealObserver::new(
            document.clone(),
            RevealAction::MarkVisible,
            &config.reveal,
            "timeline animation",
        );
        let timeline = match timeline {
            Ok(observer) => {
                report(
                    "portfolio section population",
                    mount_portfolio(document, content, &observer),
                );
                Some(observer)
            }
            Err(e) => {
                handle_error("timeline observer setup", &e);
                None
            }
        };

        let sections = RevealObserver::new(
            document.clone(),
            RevealAction::FadeIn,
            &config.reveal,
            "section animation",
        );
        let sections = match sections {
            Ok(observer) => {
                observe_sections(document, &observer);
                Some(observer)
            }
            Err(e) => {
                handle_error("section observer setup", &e);
                None
            }
        };

        report(
            "initialization",
            start_rotator(document, content, config, Rc::clone(&scheduler)),
        );

        let chrome = Chrome::install(window, document, config.chrome, Rc::clone(&scheduler));
        let chrome = match chrome {
            Ok(chrome) => Some(chrome),
            Err(e) => {
                handle_error("navigation setup", &e);
                None
            }
        };

        Self {
            _sections: sections,
            _timeline: timeline,
            _chrome: chrome,
            _scheduler: scheduler,
        }
    }
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

fn mount_portfolio(
    document: &Document,
    content: &ContentStore,
    observer: &RevealObserver,
) -> Result<(), JsValue> {
    let container = document
        .get_element_by_id(TIMELINE_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Timeline container not found"))?;

    let render = populate::portfolio_section(content);
    if let Some(title) = &render.title {
        dom::apply_all(document, None, std::slice::from_ref(title))?;
    }
    for error in &render.errors {
        handle_error("timeline item creation", &JsValue::from_str(&error.to_string()));
    }
    for item in &render.items {
        let node = dom::build(document, item)?;
        container.append_child(&node)?;
        observer.observe(&node)?;
    }
    Ok(())
}

fn observe_sections(document: &Document, observer: &RevealObserver) {
    let sections = document.get_elements_by_class_name(SECTION_CLASS);
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i) {
            report("section observer setup", observer.observe(&section));
        }
    }
}

fn start_rotator(
    document: &Document,
    content: &ContentStore,
    config: &SiteConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), JsValue> {
    let Some(subtitle) = document.query_selector(SUBTITLE_SELECTOR)? else {
        return Ok(());
    };
    let sink = SubtitleSink {
        document: document.clone(),
        element: subtitle,
    };
    sink.show("")?;

    match TextRotator::new(content.skills().to_vec(), config.rotator) {
        Ok(text_rotator) => rotator::spawn(text_rotator, Rc::new(sink), scheduler),
        Err(e) => handle_error("text rotation", &JsValue::from_str(&e.to_string())),
    }
    Ok(())
}

/// Writes rotator output into the subtitle, followed by a fresh cursor.
struct SubtitleSink {
    document: Document,
    element: Element,
}

impl TextSink for SubtitleSink {
    type Error = JsValue;

    fn show(&self, text: &str) -> Result<(), JsValue> {
        self.element.set_text_content(Some(text));
        let cursor = dom::build(&self.document, &rotator::cursor())?;
        self.element.append_child(&cursor)?;
        Ok(())
    }

    fn failed(&self, error: JsValue) {
        handle_error("text rotation", &error);
    }
}
