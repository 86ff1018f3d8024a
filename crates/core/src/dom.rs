//! In-memory application of `DomCommand`s to an `Element` tree.
//!
//! Used for static snapshots and to check populator output against a page
//! skeleton without a browser.

use folio_protocol::{DomCommand, Element, Node, Target};

/// Apply `commands` in order to `root`. `Target::Subject` addresses `root`
/// itself. Returns the targets that matched no element; their commands are
/// skipped.
pub fn apply_commands(root: &mut Element, commands: Vec<DomCommand>) -> Vec<Target> {
    let mut missing = Vec::new();
    for command in commands {
        let target = command.target().clone();
        match resolve_mut(root, &target) {
            Some(element) => apply(element, command),
            None => missing.push(target),
        }
    }
    missing
}

fn apply(element: &mut Element, command: DomCommand) {
    match command {
        DomCommand::SetText { text, .. } => {
            element.children = vec![Node::Text(text)];
        }
        DomCommand::SetStyle {
            property, value, ..
        } => set_pair(&mut element.style, property, value),
        DomCommand::SetAttribute { name, value, .. } => {
            set_pair(&mut element.attributes, name, value);
        }
        DomCommand::SetClass { class, enabled, .. } => {
            let present = element.has_class(&class);
            if enabled && !present {
                element.classes.push(class);
            } else if !enabled && present {
                element.classes.retain(|c| *c != class);
            }
        }
        DomCommand::AppendChild { element: child, .. } => {
            element.children.push(Node::Element(child));
        }
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key, value)),
    }
}

fn resolve_mut<'a>(root: &'a mut Element, target: &Target) -> Option<&'a mut Element> {
    match target {
        Target::Subject => Some(root),
        Target::Id(id) => find_mut(root, &|e| e.attribute("id") == Some(id.as_str())),
        Target::Class(class) => find_mut(root, &|e| e.has_class(class)),
    }
}

fn find_mut<'a>(
    element: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(element) {
        return Some(element);
    }
    element.children.iter_mut().find_map(|child| match child {
        Node::Element(e) => find_mut(e, pred),
        Node::Text(_) => None,
    })
}
