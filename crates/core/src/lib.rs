//! Browser-independent core of the folio portfolio page.
//!
//! Everything here is a pure transform from the [`model::ContentStore`] and
//! page events into `folio_protocol` trees and commands, plus the two small
//! state machines (subtitle rotation and reveal-once tracking) that the
//! browser bridge drives.

pub mod chrome;
pub mod config;
pub mod dom;
pub mod html;
pub mod model;
pub mod populate;
pub mod reveal;
pub mod rotator;
pub mod schedule;
pub mod timeline;
pub mod validate;

pub use config::SiteConfig;
pub use model::ContentStore;
