//! # Widget Events
//!
//! Notifications forwarded from data cells to the controller so it can
//! repaint after every state change.

use super::types::WidgetId;
use crate::widgets::models::{FetchPhase, FetchState, StateHandler};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A widget's cell transitioned; re-read its state and repaint
    StateChanged { widget: WidgetId, phase: FetchPhase },
}

impl WidgetEvent {
    pub fn widget(&self) -> WidgetId {
        match self {
            WidgetEvent::StateChanged { widget, .. } => *widget,
        }
    }
}

/// Cell handler that forwards each transition of `widget` into `sender`.
///
/// Send errors are ignored: a closed receiver means nobody is rendering.
pub fn forward_to<T: 'static>(
    widget: WidgetId,
    sender: mpsc::UnboundedSender<WidgetEvent>,
) -> StateHandler<T> {
    Box::new(move |state: &FetchState<T>| {
        let _ = sender.send(WidgetEvent::StateChanged {
            widget,
            phase: state.phase(),
        });
    })
}
