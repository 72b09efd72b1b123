//! # Fetch State
//!
//! The lifecycle of a single remote fetch as seen by a widget.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// State of the most recent fetch owned by an [`AsyncDataCell`](super::AsyncDataCell).
///
/// Payloads are shared behind an `Arc` so snapshots can be handed to the
/// rendering layer without cloning the underlying data.
#[derive(Debug)]
pub enum FetchState<T> {
    /// No request issued yet
    Idle,
    /// Request in flight
    Loading,
    /// Last request resolved with valid data
    Success {
        payload: Arc<T>,
        fetched_at: DateTime<Utc>,
    },
    /// Last request failed
    Error {
        reason: String,
        occurred_at: DateTime<Utc>,
    },
}

impl<T> FetchState<T> {
    /// Discriminant of this state, without the data it carries
    pub fn phase(&self) -> FetchPhase {
        match self {
            FetchState::Idle => FetchPhase::Idle,
            FetchState::Loading => FetchPhase::Loading,
            FetchState::Success { .. } => FetchPhase::Success,
            FetchState::Error { .. } => FetchPhase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether the last request cycle has completed (successfully or not)
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success { .. } | FetchState::Error { .. })
    }

    /// Payload of a successful fetch
    pub fn payload(&self) -> Option<&Arc<T>> {
        match self {
            FetchState::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Failure reason of a failed fetch
    pub fn reason(&self) -> Option<&str> {
        match self {
            FetchState::Error { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Success {
                payload,
                fetched_at,
            } => FetchState::Success {
                payload: Arc::clone(payload),
                fetched_at: *fetched_at,
            },
            FetchState::Error {
                reason,
                occurred_at,
            } => FetchState::Error {
                reason: reason.clone(),
                occurred_at: *occurred_at,
            },
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Data-free tag of a [`FetchState`], carried by widget events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchPhase::Idle => "idle",
            FetchPhase::Loading => "loading",
            FetchPhase::Success => "success",
            FetchPhase::Error => "error",
        };
        f.write_str(name)
    }
}
