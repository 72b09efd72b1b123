//! # Widget View
//!
//! The three mutually exclusive presentation branches of a widget, derived
//! purely from a cell snapshot.

use crate::widgets::models::{CellSnapshot, FetchState};

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView<V> {
    /// Nothing to show yet
    Loading,
    /// Last request failed
    Error { message: String },
    /// Display-ready content
    Content(V),
}

impl<V> WidgetView<V> {
    /// Choose the branch for `snapshot`, presenting payloads with `present`
    pub fn from_snapshot<T>(snapshot: &CellSnapshot<T>, present: impl FnOnce(&T) -> V) -> Self {
        match &snapshot.state {
            FetchState::Success { payload, .. } => WidgetView::Content(present(&**payload)),
            FetchState::Error { reason, .. } => WidgetView::Error {
                message: reason.clone(),
            },
            FetchState::Idle | FetchState::Loading => match &snapshot.stale {
                Some(stale) => WidgetView::Content(present(&**stale)),
                None => WidgetView::Loading,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetView::Loading)
    }

    pub fn content(&self) -> Option<&V> {
        match self {
            WidgetView::Content(view) => Some(view),
            _ => None,
        }
    }
}
