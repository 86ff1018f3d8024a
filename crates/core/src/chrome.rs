//! Navigation chrome: mobile menu, navbar background, in-page anchors.

use folio_protocol::{DomCommand, Target};

use crate::config::ChromeConfig;

pub const NAVBAR_CLASS: &str = "navbar";
pub const MENU_TOGGLE_CLASS: &str = "mobile-menu-toggle";
pub const NAV_LINKS_CLASS: &str = "nav-links";
pub const ACTIVE_CLASS: &str = "active";

const NAVBAR_TRANSPARENT: &str = "var(--bg-color)";
const NAVBAR_OPAQUE: &str = "rgba(255, 255, 255, 0.95)";

/// Observed state of the mobile menu.
///
/// The toggle's `aria-expanded` attribute and the links' `active` class are
/// flipped independently, exactly as read from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub expanded: bool,
    pub links_active: bool,
}

impl MenuState {
    /// Read from the `aria-expanded` attribute value and the `active` class.
    pub fn from_dom(aria_expanded: Option<&str>, links_active: bool) -> Self {
        Self {
            expanded: aria_expanded == Some("true"),
            links_active,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
            links_active: !self.links_active,
        }
    }

    /// Commands that write this state to the page.
    pub fn commands(self) -> Vec<DomCommand> {
        vec![
            DomCommand::set_attribute(
                Target::class(MENU_TOGGLE_CLASS),
                "aria-expanded",
                self.expanded.to_string(),
            ),
            DomCommand::set_class(Target::class(NAV_LINKS_CLASS), ACTIVE_CLASS, self.links_active),
        ]
    }

    /// Navigating to an anchor closes an open menu.
    pub fn closes_on_navigate(self) -> bool {
        self.links_active
    }

    /// Commands to run after an anchor click: a toggle for an open menu,
    /// nothing for a closed one.
    pub fn on_navigate(self) -> Vec<DomCommand> {
        if self.closes_on_navigate() {
            self.toggled().commands()
        } else {
            Vec::new()
        }
    }
}

pub fn navbar_background(scroll_y: f64, config: &ChromeConfig) -> &'static str {
    if scroll_y <= config.scroll_threshold {
        NAVBAR_TRANSPARENT
    } else {
        NAVBAR_OPAQUE
    }
}

pub fn navbar_command(scroll_y: f64, config: &ChromeConfig) -> DomCommand {
    DomCommand::set_style(
        Target::class(NAVBAR_CLASS),
        "background-color",
        navbar_background(scroll_y, config),
    )
}

/// Element id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
