//! Step definitions shared by every widget feature

use crate::common::world::WidgetWorld;
use cucumber::{given, then, when};
use livewidget::{FetchPhase, WidgetId};
use std::time::Duration;
use tracing::info;

#[given("a mock widget server")]
async fn given_mock_server(world: &mut WidgetWorld) {
    world.setup_mock_server().await;
}

#[when("the dashboard is mounted")]
async fn when_dashboard_mounted(world: &mut WidgetWorld) {
    info!("Mounting every widget");
    world
        .run_dashboard(WidgetId::ALL.to_vec())
        .await
        .expect("dashboard run should succeed");
}

#[when("the activity widget is unmounted before the response arrives")]
async fn when_unmounted_in_flight(world: &mut WidgetWorld) {
    let mut widget = world.activity_widget().expect("widget builds");
    let handle = widget.initialize().expect("first initialize issues a request");
    let cell = widget.cell().clone();

    widget.unmount();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("request settles")
        .expect("fetch task completes");

    world.orphaned_cell = Some(cell);
}

#[then("the late response is discarded")]
async fn then_late_response_discarded(world: &mut WidgetWorld) {
    let cell = world.orphaned_cell.as_ref().expect("a widget was unmounted");
    assert!(!cell.is_live());
    assert_eq!(cell.phase(), FetchPhase::Loading);
    assert!(cell.visible_payload().is_none());
}

#[then(expr = "the dashboard shows {string}")]
async fn then_dashboard_shows(world: &mut WidgetWorld, text: String) {
    let painted = world.last_frame().plain_text();
    assert!(
        painted.contains(&text),
        "Expected {text:?} in dashboard:\n{painted}"
    );
}

#[then(expr = "the dashboard does not show {string}")]
async fn then_dashboard_hides(world: &mut WidgetWorld, text: String) {
    let painted = world.last_frame().plain_text();
    assert!(
        !painted.contains(&text),
        "Did not expect {text:?} in dashboard:\n{painted}"
    );
}
