mod chrome;
mod dom;
mod page;
mod reveal;
mod scheduler;

use std::cell::RefCell;

use folio_core::html::element_to_html;
use folio_core::populate::portfolio_section;
use folio_core::validate::validate;
use folio_core::{ContentStore, SiteConfig};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Log `Error in <context>: <error>` to the console.
pub(crate) fn handle_error(context: &str, error: &JsValue) {
    web_sys::console::error_2(&format!("Error in {context}:").into(), error);
}

/// Log and swallow a component failure.
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        handle_error(context, &e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| report("initialization", mount()));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        report("initialization", mount());
    }
    Ok(())
}

fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = dom::document()?;
    let content = ContentStore::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = SiteConfig::default();

    let page = Page::mount(&window, &document, &content, &config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    messages: Vec<String>,
}

/// Validate content JSON, returning `{valid, messages}` as JSON.
#[wasm_bindgen]
pub fn validate_content(json: &str) -> Result<String, JsError> {
    let content = ContentStore::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    let messages: Vec<String> = validate(&content).iter().map(ToString::to_string).collect();
    let report = ValidationReport {
        valid: messages.is_empty(),
        messages,
    };
    serde_json::to_string(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the timeline items for content JSON as an HTML fragment.
/// Projects that fail to render are left out.
#[wasm_bindgen]
pub fn render_timeline_html(json: &str) -> Result<String, JsError> {
    let content = ContentStore::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(portfolio_section(&content)
        .items
        .iter()
        .map(element_to_html)
        .collect())
}
