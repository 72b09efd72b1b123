//! # Async Data Cell
//!
//! Owns one [`FetchState`] per widget and drives its transitions.
//!
//! - `trigger()` moves to `Loading` synchronously, then resolves to
//!   `Success` or `Error` on a spawned task. Triggers issued while a request
//!   is in flight are coalesced.
//! - Each request captures the cell's generation. A resolution whose
//!   generation no longer matches (the cell was torn down) is dropped
//!   without touching state or notifying anyone.
//! - Subscribers are invoked on every transition with the new state.

use super::fetch_state::{FetchPhase, FetchState};
use crate::widgets::services::{DataSource, FetchError};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// Callback invoked on every state transition.
///
/// Handlers run while the cell is locked and must not call back into it;
/// forward the notification (e.g. over a channel) and re-read afterwards.
pub type StateHandler<T> = Box<dyn Fn(&FetchState<T>) + Send + Sync>;

/// Whether the previous payload stays visible while a refresh is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Show the loading placeholder until the request resolves
    #[default]
    ColdStart,
    /// Keep serving the last successful payload during a refresh
    StaleWhileRevalidate,
}

/// Point-in-time view of a cell, enough to render it
#[derive(Debug)]
pub struct CellSnapshot<T> {
    pub state: FetchState<T>,
    /// Last successful payload, present only when the policy allows showing it
    pub stale: Option<Arc<T>>,
}

struct CellInner<T> {
    state: FetchState<T>,
    last_success: Option<(Arc<T>, DateTime<Utc>)>,
    generation: u64,
    live: bool,
    handlers: Vec<StateHandler<T>>,
}

impl<T> CellInner<T> {
    fn transition(&mut self, next: FetchState<T>) {
        tracing::trace!("Cell transition {} -> {}", self.state.phase(), next.phase());
        self.state = next;
        for handler in &self.handlers {
            handler(&self.state);
        }
    }
}

/// Stale-tolerant asynchronous data cell
pub struct AsyncDataCell<T> {
    source: Arc<dyn DataSource<T>>,
    policy: RefreshPolicy,
    inner: Arc<Mutex<CellInner<T>>>,
}

/// Clones are handles onto the same cell
impl<T> Clone for AsyncDataCell<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Send + Sync + 'static> AsyncDataCell<T> {
    /// Create an idle cell bound to `source`
    pub fn new(source: Arc<dyn DataSource<T>>, policy: RefreshPolicy) -> Self {
        Self {
            source,
            policy,
            inner: Arc::new(Mutex::new(CellInner {
                state: FetchState::Idle,
                last_success: None,
                generation: 0,
                live: true,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register a handler for subsequent transitions
    pub fn subscribe(&self, handler: StateHandler<T>) {
        let mut inner = lock(&self.inner);
        if inner.live {
            inner.handlers.push(handler);
        }
    }

    /// Start a fetch unless one is already in flight.
    ///
    /// Returns the handle of the spawned request, or `None` when the trigger
    /// was coalesced or the cell has been torn down. Must be called from
    /// within a tokio runtime.
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        let generation = {
            let mut inner = lock(&self.inner);
            if !inner.live {
                tracing::debug!("Ignoring trigger on torn-down cell");
                return None;
            }
            if inner.state.is_loading() {
                tracing::debug!("Coalescing trigger: request already in flight");
                return None;
            }
            inner.generation += 1;
            inner.transition(FetchState::Loading);
            inner.generation
        };

        tracing::debug!(
            "Fetching {} (generation {})",
            self.source.descriptor(),
            generation
        );

        let source = Arc::clone(&self.source);
        let inner = Arc::clone(&self.inner);
        Some(tokio::spawn(async move {
            let outcome = source.fetch().await;
            resolve(&inner, generation, outcome);
        }))
    }

    /// Latest known state
    pub fn current_state(&self) -> FetchState<T> {
        lock(&self.inner).state.clone()
    }

    pub fn phase(&self) -> FetchPhase {
        lock(&self.inner).state.phase()
    }

    /// Current state plus the stale payload the policy allows showing
    pub fn snapshot(&self) -> CellSnapshot<T> {
        let inner = lock(&self.inner);
        let stale = match (self.policy, &inner.state) {
            (RefreshPolicy::StaleWhileRevalidate, FetchState::Loading) => inner
                .last_success
                .as_ref()
                .map(|(payload, _)| Arc::clone(payload)),
            _ => None,
        };
        CellSnapshot {
            state: inner.state.clone(),
            stale,
        }
    }

    /// Payload the widget should currently display, if any
    pub fn visible_payload(&self) -> Option<Arc<T>> {
        let snapshot = self.snapshot();
        match snapshot.state {
            FetchState::Success { payload, .. } => Some(payload),
            _ => snapshot.stale,
        }
    }

    /// When the last successful payload arrived
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        lock(&self.inner).last_success.as_ref().map(|(_, at)| *at)
    }

    /// Detach all observers and invalidate any request still in flight
    pub fn teardown(&self) {
        let mut inner = lock(&self.inner);
        if !inner.live {
            return;
        }
        inner.live = false;
        inner.generation += 1;
        inner.handlers.clear();
        tracing::debug!("Cell torn down for {}", self.source.descriptor());
    }

    pub fn is_live(&self) -> bool {
        lock(&self.inner).live
    }
}

fn resolve<T>(inner: &Mutex<CellInner<T>>, generation: u64, outcome: Result<T, FetchError>) {
    let mut inner = lock(inner);
    if !inner.live || inner.generation != generation {
        tracing::debug!(
            "Discarding stale response (generation {}, current {})",
            generation,
            inner.generation
        );
        return;
    }

    let next = match outcome {
        Ok(payload) => {
            let payload = Arc::new(payload);
            let fetched_at = Utc::now();
            inner.last_success = Some((Arc::clone(&payload), fetched_at));
            FetchState::Success {
                payload,
                fetched_at,
            }
        }
        Err(error) => {
            tracing::warn!("Widget fetch failed: {}", error);
            FetchState::Error {
                reason: error.to_string(),
                occurred_at: Utc::now(),
            }
        }
    };
    inner.transition(next);
}

fn lock<T>(inner: &Mutex<CellInner<T>>) -> MutexGuard<'_, CellInner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
