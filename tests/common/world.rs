use anyhow::Result;
use cucumber::World;
use livewidget::config::{WidgetConfig, DEFAULT_NOW_PLAYING_PATH, DEFAULT_USERNAME};
use livewidget::{
    ActivityPresenter, ActivitySource, ActivityWidget, AppController, AsyncDataCell,
    CalendarPayload, DailyActivity, DashboardFrame, HttpFetcher, NowPlayingView, RefreshPolicy,
    Widget, WidgetId, WidgetRenderer, WidgetView,
};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Keeps every painted frame instead of writing to a terminal
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<DashboardFrame>,
}

impl WidgetRenderer for RecordingRenderer {
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    fn render_frame(&mut self, frame: &DashboardFrame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(World)]
#[world(init = Self::new)]
pub struct WidgetWorld {
    /// Mock server standing in for both remote endpoints
    pub server: Option<MockServer>,

    /// Settings handed to the controller
    pub config: WidgetConfig,

    /// Days served by the activity endpoint
    pub served_days: Vec<DailyActivity>,

    /// Frames painted by the last dashboard run
    pub frames: Vec<DashboardFrame>,

    /// Cell of a widget unmounted while its request was in flight
    pub orphaned_cell: Option<AsyncDataCell<CalendarPayload>>,
}

impl std::fmt::Debug for WidgetWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetWorld")
            .field("config", &self.config)
            .field("served_days", &self.served_days.len())
            .field("frames", &self.frames.len())
            .finish()
    }
}

impl WidgetWorld {
    pub fn new() -> Self {
        Self {
            server: None,
            config: WidgetConfig::default(),
            served_days: Vec::new(),
            frames: Vec::new(),
            orphaned_cell: None,
        }
    }

    /// Start the mock server and point both widgets at it
    pub async fn setup_mock_server(&mut self) {
        let server = MockServer::start().await;
        self.config.activity.host = server.uri();
        self.config.now_playing.origin = server.uri();
        self.server = Some(server);
    }

    pub fn server(&self) -> &MockServer {
        self.server
            .as_ref()
            .expect("mock server should be started in the background")
    }

    pub fn activity_mock() -> wiremock::MockBuilder {
        Mock::given(method("GET"))
            .and(path(format!("/v4/{DEFAULT_USERNAME}")))
            .and(query_param("y", "last"))
    }

    pub fn now_playing_mock() -> wiremock::MockBuilder {
        Mock::given(method("GET")).and(path(DEFAULT_NOW_PLAYING_PATH))
    }

    pub async fn serve_activity(&mut self, template: ResponseTemplate) {
        Self::activity_mock()
            .respond_with(template)
            .mount(self.server())
            .await;
    }

    pub async fn serve_now_playing(&mut self, template: ResponseTemplate) {
        Self::now_playing_mock()
            .respond_with(template)
            .mount(self.server())
            .await;
    }

    /// Run the dashboard with only the given widgets mounted, recording frames
    pub async fn run_dashboard(&mut self, widgets: Vec<WidgetId>) -> Result<()> {
        self.config.widgets = widgets;
        let mut controller = AppController::new(&self.config, RecordingRenderer::default())?;
        controller.run().await?;
        self.frames = controller.renderer().frames.clone();
        Ok(())
    }

    /// Build a standalone activity widget against the mock server
    pub fn activity_widget(&self) -> Result<ActivityWidget> {
        let source = ActivitySource::new(
            HttpFetcher::new()?,
            &self.config.activity.host,
            &self.config.activity.username,
        );
        Ok(Widget::new(
            WidgetId::Activity,
            ActivityPresenter {
                window: self.config.activity.window,
            },
            Arc::new(source),
            RefreshPolicy::ColdStart,
        ))
    }

    pub fn first_frame(&self) -> &DashboardFrame {
        self.frames.first().expect("at least one frame painted")
    }

    pub fn last_frame(&self) -> &DashboardFrame {
        self.frames.last().expect("at least one frame painted")
    }

    pub fn activity_view(&self) -> &WidgetView<livewidget::CalendarView> {
        self.last_frame()
            .activity
            .as_ref()
            .expect("activity widget mounted")
    }

    pub fn now_playing_view(&self) -> &WidgetView<NowPlayingView> {
        self.last_frame()
            .now_playing
            .as_ref()
            .expect("now-playing widget mounted")
    }

    /// Paths of every request the mock server received
    pub async fn requested_paths(&self) -> Vec<String> {
        self.server()
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}

impl Default for WidgetWorld {
    fn default() -> Self {
        Self::new()
    }
}
