//! Step definitions for Cucumber tests
//!
//! Steps are organized by widget:
//! - `dashboard` - Mock server setup and dashboard lifecycle
//! - `activity` - Activity calendar endpoint and assertions
//! - `now_playing` - Now-playing endpoint and card assertions

pub mod activity;
pub mod dashboard;
pub mod now_playing;
