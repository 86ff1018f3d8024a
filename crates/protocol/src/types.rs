use serde::{Deserialize, Serialize};

/// Addresses the element a `DomCommand` applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// `document.getElementById(id)`.
    Id(String),
    /// First element matching `.class`.
    Class(String),
    /// The element the caller is already holding (observer entry, event
    /// target, freshly created node).
    Subject,
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// CSS selector equivalent, `None` for `Subject`.
    pub fn selector(&self) -> Option<String> {
        match self {
            Target::Id(id) => Some(format!("#{id}")),
            Target::Class(class) => Some(format!(".{class}")),
            Target::Subject => None,
        }
    }
}

/// Pixel margins around the viewport used for intersection checks, in CSS
/// `rootMargin` order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ViewportMargin {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Format as a CSS `rootMargin` string, e.g. `0px 0px -50px 0px`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_css() {
        let margin = ViewportMargin::new(0.0, 0.0, -50.0, 0.0);
        assert_eq!(margin.to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn selectors() {
        assert_eq!(Target::id("aboutTitle").selector().as_deref(), Some("#aboutTitle"));
        assert_eq!(Target::class("navbar").selector().as_deref(), Some(".navbar"));
        assert_eq!(Target::Subject.selector(), None);
    }
}
