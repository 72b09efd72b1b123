//! # Events Module
//!
//! Widget identifiers and the change notifications cells publish.

pub mod types;
pub mod widget_events;

pub use types::WidgetId;
pub use widget_events::{forward_to, WidgetEvent};
