use std::collections::HashSet;
use std::hash::Hash;

use folio_protocol::{DomCommand, Target};

pub const SECTION_CLASS: &str = "section";
pub const VISIBLE_CLASS: &str = "visible";

/// What happens to an element the first time it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Hidden and shifted down until revealed, then faded in. Used for
    /// page sections.
    FadeIn,
    /// Gains the `visible` class; the stylesheet owns the transition.
    /// Used for timeline items.
    MarkVisible,
}

impl RevealAction {
    /// Commands applied to the element when it starts being observed.
    pub fn prepare(self) -> Vec<DomCommand> {
        match self {
            RevealAction::FadeIn => vec![
                DomCommand::set_style(Target::Subject, "opacity", "0"),
                DomCommand::set_style(Target::Subject, "transform", "translateY(20px)"),
                DomCommand::set_style(
                    Target::Subject,
                    "transition",
                    "opacity var(--transition-medium), transform var(--transition-medium)",
                ),
            ],
            RevealAction::MarkVisible => Vec::new(),
        }
    }

    /// Commands applied once the element intersects the viewport.
    pub fn reveal(self) -> Vec<DomCommand> {
        match self {
            RevealAction::FadeIn => vec![
                DomCommand::set_style(Target::Subject, "opacity", "1"),
                DomCommand::set_style(Target::Subject, "transform", "translateY(0)"),
            ],
            RevealAction::MarkVisible => {
                vec![DomCommand::set_class(Target::Subject, VISIBLE_CLASS, true)]
            }
        }
    }
}

/// At-most-once reveal bookkeeping for a set of observed elements.
///
/// An element is revealed on its first intersecting notification and is
/// never watched again, so scrolling back out does not reverse it and
/// re-entering does not replay it.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    action: RevealAction,
    watching: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(action: RevealAction) -> Self {
        Self {
            action,
            watching: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    pub fn action(&self) -> RevealAction {
        self.action
    }

    /// Start watching `key`, returning its prepare commands. Already
    /// watched or revealed keys are ignored.
    pub fn observe(&mut self, key: K) -> Vec<DomCommand> {
        if self.revealed.contains(&key) || !self.watching.insert(key) {
            return Vec::new();
        }
        self.action.prepare()
    }

    /// Handle an intersection notification. Returns the reveal commands
    /// the first time a watched key intersects; the caller must stop
    /// observing the element then.
    pub fn notify(&mut self, key: &K, is_intersecting: bool) -> Option<Vec<DomCommand>> {
        if !is_intersecting || !self.watching.remove(key) {
            return None;
        }
        self.revealed.insert(key.clone());
        Some(self.action.reveal())
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }
}
