//! Typewriter-style subtitle rotation.
//!
//! [`TextRotator`] is a pure state machine: every [`TextRotator::tick`]
//! yields the text to show and how long to wait before the next tick.
//! [`spawn`] drives it through a [`Scheduler`] and a [`TextSink`] until the
//! sink reports an error.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_protocol::Element;
use thiserror::Error;

use crate::config::RotatorTiming;
use crate::schedule::Scheduler;

pub const CURSOR_CLASS: &str = "typing-cursor";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotatorError {
    #[error("no words to rotate")]
    NoWords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// The word is complete and on hold; the next tick starts deleting.
    Pausing,
    Deleting,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TextRotator {
    words: Vec<String>,
    timing: RotatorTiming,
    index: usize,
    /// Visible prefix length of the current word, in chars.
    shown: usize,
    phase: Phase,
}

impl TextRotator {
    pub fn new(words: Vec<String>, timing: RotatorTiming) -> Result<Self, RotatorError> {
        if words.is_empty() {
            return Err(RotatorError::NoWords);
        }
        Ok(Self {
            words,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The in-progress substring of the current word.
    pub fn text(&self) -> &str {
        prefix(&self.words[self.index], self.shown)
    }

    pub fn tick(&mut self) -> Tick {
        let word_len = self.words[self.index].chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(word_len);
                let text = self.text().to_string();
                if self.shown == word_len {
                    self.phase = Phase::Pausing;
                    Tick {
                        text,
                        delay: self.timing.pause_delay(),
                    }
                } else {
                    Tick {
                        text,
                        delay: self.timing.type_delay(),
                    }
                }
            }
            Phase::Pausing | Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                let text = self.text().to_string();
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    Tick {
                        text,
                        delay: self.timing.next_word_delay(),
                    }
                } else {
                    self.phase = Phase::Deleting;
                    Tick {
                        text,
                        delay: self.timing.delete_delay(),
                    }
                }
            }
        }
    }
}

fn prefix(word: &str, chars: usize) -> &str {
    let end = word
        .char_indices()
        .nth(chars)
        .map_or(word.len(), |(i, _)| i);
    &word[..end]
}

/// The blinking cursor appended after the rotating text.
pub fn cursor() -> Element {
    Element::new("span").class(CURSOR_CLASS).text("|")
}

/// Where rotator output goes.
pub trait TextSink {
    type Error;

    /// Replace the displayed text (and re-append the cursor).
    fn show(&self, text: &str) -> Result<(), Self::Error>;

    /// Called once with the error that ended the rotation.
    fn failed(&self, error: Self::Error);
}

/// Run the first tick now and keep rescheduling forever. A sink error is
/// handed to [`TextSink::failed`] and no further tick is scheduled.
pub fn spawn<K>(rotator: TextRotator, sink: Rc<K>, scheduler: Rc<dyn Scheduler>)
where
    K: TextSink + 'static,
{
    step(Rc::new(RefCell::new(rotator)), sink, scheduler);
}

fn step<K>(state: Rc<RefCell<TextRotator>>, sink: Rc<K>, scheduler: Rc<dyn Scheduler>)
where
    K: TextSink + 'static,
{
    let tick = state.borrow_mut().tick();
    if let Err(e) = sink.show(&tick.text) {
        sink.failed(e);
        return;
    }
    let next = Rc::clone(&scheduler);
    scheduler.schedule(tick.delay, Box::new(move || step(state, sink, next)));
}
