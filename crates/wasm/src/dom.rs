use folio_protocol::{DomCommand, Element, Node, Target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Materialize an element description as a detached DOM element.
pub fn build(document: &Document, element: &Element) -> Result<web_sys::Element, JsValue> {
    let node = document.create_element(&element.tag)?;
    if !element.classes.is_empty() {
        node.set_class_name(&element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        node.set_attribute(name, value)?;
    }
    if !element.style.is_empty() {
        let style = as_html(&node)?.style();
        for (property, value) in &element.style {
            style.set_property(property, value)?;
        }
    }
    for child in &element.children {
        match child {
            Node::Text(text) => {
                node.append_child(&document.create_text_node(text))?;
            }
            Node::Element(e) => {
                let built = build(document, e)?;
                node.append_child(&built)?;
            }
        }
    }
    Ok(node)
}

/// Find the element a command addresses. `Subject` resolves to `subject`.
pub fn resolve(
    document: &Document,
    target: &Target,
    subject: Option<&web_sys::Element>,
) -> Result<Option<web_sys::Element>, JsValue> {
    match target {
        Target::Id(id) => Ok(document.get_element_by_id(id)),
        Target::Class(_) => match target.selector() {
            Some(selector) => document.query_selector(&selector),
            None => Ok(None),
        },
        Target::Subject => Ok(subject.cloned()),
    }
}

/// Apply each command to the element it addresses. Commands whose target
/// is not on the page are skipped.
pub fn apply_all(
    document: &Document,
    subject: Option<&web_sys::Element>,
    commands: &[DomCommand],
) -> Result<(), JsValue> {
    for command in commands {
        if let Some(element) = resolve(document, command.target(), subject)? {
            apply_to(document, &element, command)?;
        }
    }
    Ok(())
}

pub fn apply_to(
    document: &Document,
    element: &web_sys::Element,
    command: &DomCommand,
) -> Result<(), JsValue> {
    match command {
        DomCommand::SetText { text, .. } => element.set_text_content(Some(text)),
        DomCommand::SetStyle {
            property, value, ..
        } => as_html(element)?.style().set_property(property, value)?,
        DomCommand::SetClass { class, enabled, .. } => {
            element.class_list().toggle_with_force(class, *enabled)?;
        }
        DomCommand::SetAttribute { name, value, .. } => element.set_attribute(name, value)?,
        DomCommand::AppendChild { element: child, .. } => {
            let built = build(document, child)?;
            element.append_child(&built)?;
        }
    }
    Ok(())
}

fn as_html(element: &web_sys::Element) -> Result<&HtmlElement, JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("element has no inline style"))
}
