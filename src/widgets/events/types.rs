//! # Event Types
//!
//! Identifiers shared by widget events and the controller.

use std::fmt;

/// Which widget an event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetId {
    Activity,
    NowPlaying,
}

impl WidgetId {
    pub const ALL: [WidgetId; 2] = [WidgetId::Activity, WidgetId::NowPlaying];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetId::Activity => "activity",
            WidgetId::NowPlaying => "now-playing",
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
