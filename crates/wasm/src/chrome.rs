use std::rc::Rc;

use folio_core::chrome::{self, ACTIVE_CLASS, MENU_TOGGLE_CLASS, MenuState, NAV_LINKS_CLASS};
use folio_core::config::ChromeConfig;
use folio_core::schedule::{Debounce, Scheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::{dom, report};

type EventCallback = Closure<dyn FnMut(Event)>;

/// Listeners for anchors, the mobile menu and the navbar. Dropping this
/// detaches nothing but invalidates the callbacks, so it lives as long as
/// the page.
pub struct Chrome {
    _anchor_click: EventCallback,
    _menu_click: Option<EventCallback>,
    _scroll: EventCallback,
}

impl Chrome {
    pub fn install(
        window: &Window,
        document: &Document,
        config: ChromeConfig,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, JsValue> {
        let anchor_click = anchor_listener(document.clone());
        let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
        for i in 0..anchors.length() {
            if let Some(anchor) = anchors.item(i) {
                anchor.add_event_listener_with_callback(
                    "click",
                    anchor_click.as_ref().unchecked_ref(),
                )?;
            }
        }

        let menu_click = match class_element(document, MENU_TOGGLE_CLASS)? {
            Some(toggle) => {
                let doc = document.clone();
                let callback = EventCallback::new(move |_: Event| {
                    report("mobile menu toggle", toggle_menu(&doc));
                });
                toggle.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
                Some(callback)
            }
            None => None,
        };

        let debounce = Debounce::new(scheduler, config.scroll_debounce());
        let scroll_window = window.clone();
        let scroll_document = document.clone();
        let scroll = EventCallback::new(move |_: Event| {
            let window = scroll_window.clone();
            let document = scroll_document.clone();
            debounce.trigger(move || {
                report("scroll handler", update_navbar(&window, &document, &config));
            });
        });
        window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())?;

        Ok(Self {
            _anchor_click: anchor_click,
            _menu_click: menu_click,
            _scroll: scroll,
        })
    }
}

fn anchor_listener(document: Document) -> EventCallback {
    EventCallback::new(move |event: Event| {
        report("smooth scroll", on_anchor_click(&document, &event));
    })
}

fn on_anchor_click(document: &Document, event: &Event) -> Result<(), JsValue> {
    event.prevent_default();
    let Some(anchor) = event
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return Ok(());
    };
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(target) = chrome::anchor_target(&href).and_then(|id| document.get_element_by_id(id))
    else {
        return Ok(());
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    let links_active = class_element(document, NAV_LINKS_CLASS)?
        .is_some_and(|links| links.class_list().contains(ACTIVE_CLASS));
    if !links_active {
        return Ok(());
    }
    let aria_expanded = class_element(document, MENU_TOGGLE_CLASS)?
        .and_then(|toggle| toggle.get_attribute("aria-expanded"));
    let menu = MenuState::from_dom(aria_expanded.as_deref(), links_active);
    dom::apply_all(document, None, &menu.on_navigate())
}

fn read_menu(document: &Document) -> Result<MenuState, JsValue> {
    let toggle = class_element(document, MENU_TOGGLE_CLASS)?
        .ok_or_else(|| JsValue::from_str("mobile menu toggle not found"))?;
    let links = class_element(document, NAV_LINKS_CLASS)?
        .ok_or_else(|| JsValue::from_str("nav links not found"))?;
    Ok(MenuState::from_dom(
        toggle.get_attribute("aria-expanded").as_deref(),
        links.class_list().contains(ACTIVE_CLASS),
    ))
}

pub fn toggle_menu(document: &Document) -> Result<(), JsValue> {
    let next = read_menu(document)?.toggled();
    dom::apply_all(document, None, &next.commands())
}

fn update_navbar(window: &Window, document: &Document, config: &ChromeConfig) -> Result<(), JsValue> {
    let scroll_y = window.scroll_y()?;
    dom::apply_all(document, None, &[chrome::navbar_command(scroll_y, config)])
}

fn class_element(document: &Document, class: &str) -> Result<Option<Element>, JsValue> {
    document.query_selector(&format!(".{class}"))
}
