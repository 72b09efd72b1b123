//! # Widget
//!
//! A widget owns exactly one [`AsyncDataCell`] and a presenter that turns
//! the cell's payload into a display shape. Whoever owns the widget's
//! lifecycle calls [`Widget::initialize`] once; dropping or unmounting the
//! widget tears the cell down so late responses are discarded.

use crate::widgets::events::WidgetId;
use crate::widgets::models::{
    AsyncDataCell, CalendarPayload, FetchPhase, NowPlayingPayload, RefreshPolicy, StateHandler,
};
use crate::widgets::services::DataSource;
use crate::widgets::view_models::{CalendarView, NowPlayingView, WidgetView, DEFAULT_WINDOW_DAYS};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Widget-specific mapping from payload to view
pub trait WidgetPresenter: Send + Sync + 'static {
    type Payload: Send + Sync + 'static;
    type View;

    fn present(&self, payload: &Self::Payload) -> Self::View;
}

/// Activity calendar: last `window` days as a week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityPresenter {
    pub window: usize,
}

impl Default for ActivityPresenter {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl WidgetPresenter for ActivityPresenter {
    type Payload = CalendarPayload;
    type View = CalendarView;

    fn present(&self, payload: &CalendarPayload) -> CalendarView {
        CalendarView::from_payload(payload, self.window)
    }
}

/// Now-playing card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NowPlayingPresenter;

impl WidgetPresenter for NowPlayingPresenter {
    type Payload = NowPlayingPayload;
    type View = NowPlayingView;

    fn present(&self, payload: &NowPlayingPayload) -> NowPlayingView {
        NowPlayingView::from_payload(payload)
    }
}

pub struct Widget<P: WidgetPresenter> {
    id: WidgetId,
    presenter: P,
    cell: AsyncDataCell<P::Payload>,
    initialized: bool,
}

impl<P: WidgetPresenter> Widget<P> {
    /// Create a widget with an idle cell; no request is issued yet
    pub fn new(
        id: WidgetId,
        presenter: P,
        source: Arc<dyn DataSource<P::Payload>>,
        policy: RefreshPolicy,
    ) -> Self {
        tracing::debug!("Creating {} widget ({:?})", id, policy);
        Self {
            id,
            presenter,
            cell: AsyncDataCell::new(source, policy),
            initialized: false,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Observe this widget's cell transitions
    pub fn subscribe(&self, handler: StateHandler<P::Payload>) {
        self.cell.subscribe(handler);
    }

    /// Issue the mount-time fetch. Only the first call has any effect.
    pub fn initialize(&mut self) -> Option<JoinHandle<()>> {
        if self.initialized {
            tracing::debug!("{} widget already initialized", self.id);
            return None;
        }
        self.initialized = true;
        tracing::info!("Initializing {} widget", self.id);
        self.cell.trigger()
    }

    /// Request a refresh; coalesced while a request is in flight
    pub fn refresh(&self) -> Option<JoinHandle<()>> {
        self.cell.trigger()
    }

    /// Presentation branch for the cell's current state
    pub fn view(&self) -> WidgetView<P::View> {
        WidgetView::from_snapshot(&self.cell.snapshot(), |payload| {
            self.presenter.present(payload)
        })
    }

    pub fn phase(&self) -> FetchPhase {
        self.cell.phase()
    }

    pub fn cell(&self) -> &AsyncDataCell<P::Payload> {
        &self.cell
    }

    /// Tear the widget down, discarding any response still in flight
    pub fn unmount(self) {
        tracing::info!("Unmounting {} widget", self.id);
    }
}

impl<P: WidgetPresenter> Drop for Widget<P> {
    fn drop(&mut self) {
        self.cell.teardown();
    }
}

pub type ActivityWidget = Widget<ActivityPresenter>;
pub type NowPlayingWidget = Widget<NowPlayingPresenter>;
