//! # LiveWidget - Live External Data Widgets for the Terminal
//!
//! A small dashboard that shows a contribution calendar and a now-playing
//! card, each backed by a remote JSON endpoint.
//!
//! ## Architecture
//!
//! Every widget is one asynchronous data cell plus a pure view transform:
//!
//! ```text
//! ┌─────────────┐   fetch    ┌──────────────┐  transition  ┌──────────────┐
//! │ DataSource  │◄───────────│AsyncDataCell │─────────────►│  Controller  │
//! │             │            │              │   events     │              │
//! │ - HTTP GET  │───────────►│ - Idle       │              │ - Event Loop │
//! │ - Decode    │  payload   │ - Loading    │              │ - Refresh    │
//! └─────────────┘  or error  │ - Success    │              └──────┬───────┘
//!                            │ - Error      │                     │ frame
//!                            └──────┬───────┘                     ▼
//!                                   │ snapshot            ┌──────────────┐
//!                                   ▼                     │   Renderer   │
//!                            ┌──────────────┐   view      │              │
//!                            │  ViewModels  │────────────►│ - Terminal   │
//!                            │ - Window     │             │ - Glyphs     │
//!                            │ - Proxy URL  │             └──────────────┘
//!                            └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod widgets;

// Re-export main types for easy access
pub use widgets::*;
