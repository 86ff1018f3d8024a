use std::time::Duration;

use folio_protocol::ViewportMargin;
use serde::{Deserialize, Serialize};

/// Timing and threshold settings for the page behaviors.
///
/// Every field has a default, so an empty JSON object (or no file at all)
/// yields the stock page behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub rotator: RotatorTiming,
    pub reveal: RevealOptions,
    pub chrome: ChromeConfig,
}

impl SiteConfig {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// Delays between rotator ticks, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorTiming {
    /// Delay after typing one character. Deleting runs at half this.
    pub type_ms: u64,
    /// Hold time once a word is fully typed.
    pub pause_ms: u64,
    /// Delay after a word is fully deleted, before the next one starts.
    pub next_word_ms: u64,
}

impl Default for RotatorTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            pause_ms: 2000,
            next_word_ms: 500,
        }
    }
}

impl RotatorTiming {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.type_ms / 2)
    }

    pub fn pause_delay(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn next_word_delay(&self) -> Duration {
        Duration::from_millis(self.next_word_ms)
    }
}

/// Intersection options shared by every reveal observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible fraction of the element that counts as intersecting.
    pub threshold: f64,
    pub root_margin: ViewportMargin,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: ViewportMargin::new(0.0, 0.0, -50.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Scroll distance in pixels past which the navbar turns opaque.
    pub scroll_threshold: f64,
    pub scroll_debounce_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            scroll_debounce_ms: 10,
        }
    }
}

impl ChromeConfig {
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}
