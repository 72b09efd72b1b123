//! # Views Module
//!
//! Contains all view-related components for painting widgets to the terminal.

pub mod terminal_renderer;

pub use terminal_renderer::{
    calendar_lines, now_playing_lines, DashboardFrame, Line, RenderMode, Span, TerminalRenderer,
    Tone, WidgetRenderer,
};
