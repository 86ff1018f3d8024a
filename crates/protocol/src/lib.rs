pub mod commands;
pub mod node;
pub mod types;

pub use commands::DomCommand;
pub use node::{Element, Node};
pub use types::{Target, ViewportMargin};
