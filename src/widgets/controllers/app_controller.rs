//! # Dashboard Application Controller
//!
//! The controller mounts the configured widgets, listens for their state
//! changes and repaints the dashboard through a [`WidgetRenderer`].

use crate::config::WidgetConfig;
use crate::widgets::events::{forward_to, WidgetEvent, WidgetId};
use crate::widgets::models::{CalendarPayload, FetchPhase, NowPlayingPayload, RefreshPolicy};
use crate::widgets::services::{ActivitySource, DataSource, HttpFetcher, NowPlayingSource};
use crate::widgets::views::{DashboardFrame, WidgetRenderer};
use crate::widgets::widget::{
    ActivityPresenter, ActivityWidget, NowPlayingPresenter, NowPlayingWidget, Widget,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

enum LoopSignal {
    Widget(Option<WidgetEvent>),
    RefreshTick,
    Interrupt,
}

/// The main application controller
pub struct AppController<R: WidgetRenderer> {
    activity: Option<ActivityWidget>,
    now_playing: Option<NowPlayingWidget>,
    renderer: R,
    event_receiver: mpsc::UnboundedReceiver<WidgetEvent>,
    refresh: Option<Duration>,
    last_frame: Option<DashboardFrame>,
    should_quit: bool,
}

impl<R: WidgetRenderer> AppController<R> {
    /// Create a controller that fetches over HTTP using the configured endpoints
    pub fn new(config: &WidgetConfig, renderer: R) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        let activity: Arc<dyn DataSource<CalendarPayload>> = Arc::new(ActivitySource::new(
            fetcher.clone(),
            &config.activity.host,
            &config.activity.username,
        ));
        let now_playing: Arc<dyn DataSource<NowPlayingPayload>> = Arc::new(NowPlayingSource::new(
            fetcher,
            &config.now_playing.origin,
            &config.now_playing.path,
        ));

        Ok(Self::with_sources(config, activity, now_playing, renderer))
    }

    /// Create a controller with injected data sources (dependency injection)
    pub fn with_sources(
        config: &WidgetConfig,
        activity_source: Arc<dyn DataSource<CalendarPayload>>,
        now_playing_source: Arc<dyn DataSource<NowPlayingPayload>>,
        renderer: R,
    ) -> Self {
        let (sender, event_receiver) = mpsc::unbounded_channel();

        let activity = config.is_enabled(WidgetId::Activity).then(|| {
            let widget = Widget::new(
                WidgetId::Activity,
                ActivityPresenter {
                    window: config.activity.window,
                },
                activity_source,
                RefreshPolicy::ColdStart,
            );
            widget.subscribe(forward_to(WidgetId::Activity, sender.clone()));
            widget
        });

        let now_playing = config.is_enabled(WidgetId::NowPlaying).then(|| {
            let widget = Widget::new(
                WidgetId::NowPlaying,
                NowPlayingPresenter,
                now_playing_source,
                RefreshPolicy::StaleWhileRevalidate,
            );
            widget.subscribe(forward_to(WidgetId::NowPlaying, sender.clone()));
            widget
        });

        Self {
            activity,
            now_playing,
            renderer,
            event_receiver,
            refresh: config.refresh,
            last_frame: None,
            should_quit: false,
        }
    }

    /// Run the dashboard until every widget settles (or until Ctrl-C when refreshing)
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;

        self.mount();
        self.paint()?;

        let mut ticker = self.refresh.map(|period| {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        while !self.should_quit {
            if ticker.is_none() && self.all_settled() {
                tracing::debug!("All widgets settled");
                break;
            }

            let signal = tokio::select! {
                event = self.event_receiver.recv() => LoopSignal::Widget(event),
                _ = next_tick(&mut ticker) => LoopSignal::RefreshTick,
                _ = tokio::signal::ctrl_c() => LoopSignal::Interrupt,
            };

            match signal {
                LoopSignal::Widget(Some(event)) => {
                    tracing::debug!("Widget event: {:?}", event);
                    self.paint()?;
                }
                LoopSignal::Widget(None) => {
                    tracing::debug!("Widget event channel closed");
                    self.should_quit = true;
                }
                LoopSignal::RefreshTick => self.refresh_all(),
                LoopSignal::Interrupt => {
                    tracing::info!("Interrupted, shutting down");
                    self.should_quit = true;
                }
            }
        }

        self.paint()?;
        self.shutdown()
    }

    /// Issue each mounted widget's mount-time fetch
    pub fn mount(&mut self) {
        if let Some(widget) = self.activity.as_mut() {
            widget.initialize();
        }
        if let Some(widget) = self.now_playing.as_mut() {
            widget.initialize();
        }
    }

    /// Ask every mounted widget to refresh; in-flight requests absorb the tick
    pub fn refresh_all(&self) {
        if let Some(widget) = &self.activity {
            if widget.refresh().is_none() {
                tracing::debug!("{} refresh coalesced", widget.id());
            }
        }
        if let Some(widget) = &self.now_playing {
            if widget.refresh().is_none() {
                tracing::debug!("{} refresh coalesced", widget.id());
            }
        }
    }

    /// Snapshot of what the dashboard should show right now
    pub fn frame(&self) -> DashboardFrame {
        DashboardFrame {
            activity: self.activity.as_ref().map(Widget::view),
            now_playing: self.now_playing.as_ref().map(Widget::view),
        }
    }

    pub fn phase(&self, widget: WidgetId) -> Option<FetchPhase> {
        match widget {
            WidgetId::Activity => self.activity.as_ref().map(Widget::phase),
            WidgetId::NowPlaying => self.now_playing.as_ref().map(Widget::phase),
        }
    }

    pub fn all_settled(&self) -> bool {
        WidgetId::ALL
            .iter()
            .filter_map(|id| self.phase(*id))
            .all(|phase| matches!(phase, FetchPhase::Success | FetchPhase::Error))
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Unmount every widget and restore the terminal
    pub fn shutdown(&mut self) -> Result<()> {
        if let Some(widget) = self.activity.take() {
            widget.unmount();
        }
        if let Some(widget) = self.now_playing.take() {
            widget.unmount();
        }
        self.renderer.cleanup()
    }

    fn paint(&mut self) -> Result<()> {
        let frame = self.frame();
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(());
        }
        self.renderer.render_frame(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
