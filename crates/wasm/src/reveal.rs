use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::RevealOptions;
use folio_core::reveal::{RevealAction, RevealTracker};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use crate::{dom, report};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observed elements; an element's key is its index here.
type Watched = Rc<RefCell<Vec<Element>>>;

/// An `IntersectionObserver` that applies a [`RevealAction`] once per
/// element and then stops observing it.
pub struct RevealObserver {
    document: Document,
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<usize>>>,
    elements: Watched,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub fn new(
        document: Document,
        action: RevealAction,
        options: &RevealOptions,
        context: &'static str,
    ) -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new(action)));

        let elements: Watched = Rc::default();

        let cb_tracker = Rc::clone(&tracker);
        let cb_elements = Rc::clone(&elements);
        let cb_document = document.clone();
        let callback = EntriesCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                report(
                    context,
                    on_entry(&cb_document, &cb_tracker, &cb_elements, &entry, &observer),
                );
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_css());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            document,
            observer,
            tracker,
            elements,
            _callback: callback,
        })
    }

    /// Apply the action's initial state and start observing the element.
    /// An element already handed to this observer is left as it is.
    pub fn observe(&self, element: &Element) -> Result<(), JsValue> {
        if key_of(&self.elements.borrow(), element).is_some() {
            return Ok(());
        }
        let key = {
            let mut elements = self.elements.borrow_mut();
            elements.push(element.clone());
            elements.len() - 1
        };

        let prepare = self.tracker.borrow_mut().observe(key);
        for command in &prepare {
            dom::apply_to(&self.document, element, command)?;
        }
        self.observer.observe(element);
        Ok(())
    }
}

fn on_entry(
    document: &Document,
    tracker: &RefCell<RevealTracker<usize>>,
    elements: &RefCell<Vec<Element>>,
    entry: &IntersectionObserverEntry,
    observer: &IntersectionObserver,
) -> Result<(), JsValue> {
    let target = entry.target();
    let Some(key) = key_of(&elements.borrow(), &target) else {
        return Ok(());
    };
    let reveal = tracker.borrow_mut().notify(&key, entry.is_intersecting());
    if let Some(commands) = reveal {
        observer.unobserve(&target);
        for command in &commands {
            dom::apply_to(document, &target, command)?;
        }
    }
    Ok(())
}

fn key_of(elements: &[Element], element: &Element) -> Option<usize> {
    let node: &Node = element;
    elements.iter().position(|e| e.is_same_node(Some(node)))
}
