use serde::{Deserialize, Serialize};

use crate::node::Element;
use crate::types::Target;

/// A single, stateless DOM mutation.
///
/// The core emits a `Vec<DomCommand>` for each populator or behavior.
/// Bridges consume this list sequentially; each command carries all the
/// data it needs, including which element it addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    /// Replace the text content of the target.
    SetText { target: Target, text: String },

    /// Set a single inline style property.
    SetStyle {
        target: Target,
        property: String,
        value: String,
    },

    /// Add the class when `enabled`, remove it otherwise.
    SetClass {
        target: Target,
        class: String,
        enabled: bool,
    },

    /// Set an attribute value.
    SetAttribute {
        target: Target,
        name: String,
        value: String,
    },

    /// Build the element tree and append it as the last child of the target.
    AppendChild { target: Target, element: Element },
}

impl DomCommand {
    pub fn set_text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn set_style(target: Target, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn set_class(target: Target, class: &str, enabled: bool) -> Self {
        Self::SetClass {
            target,
            class: class.to_string(),
            enabled,
        }
    }

    pub fn set_attribute(target: Target, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute {
            target,
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            DomCommand::SetText { target, .. }
            | DomCommand::SetStyle { target, .. }
            | DomCommand::SetClass { target, .. }
            | DomCommand::SetAttribute { target, .. }
            | DomCommand::AppendChild { target, .. } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_through_json() {
        let cmd = DomCommand::set_text(Target::id("footerName"), "Ada");
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("footerName"));
        let back: DomCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn target_accessor() {
        let cmd = DomCommand::set_class(Target::class("nav-links"), "active", true);
        assert_eq!(cmd.target(), &Target::class("nav-links"));
    }
}
