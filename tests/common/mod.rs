//! Common test utilities and infrastructure
//!
//! - Cucumber world implementation
//! - Recording renderer used in place of the terminal

pub mod world;

#[allow(unused_imports)]
pub use world::{RecordingRenderer, WidgetWorld};
