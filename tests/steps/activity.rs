//! Step definitions for the activity calendar widget

use crate::common::world::WidgetWorld;
use chrono::{Duration as DayOffset, NaiveDate};
use cucumber::{given, then, when};
use livewidget::{DailyActivity, WidgetId, WidgetView};
use serde_json::json;
use std::time::Duration;
use wiremock::ResponseTemplate;

fn consecutive_days(days: usize) -> Vec<DailyActivity> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..days)
        .map(|i| DailyActivity::new(start + DayOffset::days(i as i64), (i % 9) as u32, (i % 5) as u8))
        .collect()
}

fn calendar_body(days: &[DailyActivity]) -> serde_json::Value {
    json!({
        "total": { "lastYear": days.iter().map(|day| day.count as u64).sum::<u64>() },
        "contributions": days,
    })
}

// === ENDPOINT SETUP ===

#[given(expr = "the activity endpoint returns {int} consecutive days")]
async fn given_activity_days(world: &mut WidgetWorld, days: usize) {
    let served = consecutive_days(days);
    let template = ResponseTemplate::new(200).set_body_json(calendar_body(&served));
    world.served_days = served;
    world.serve_activity(template).await;
}

#[given(expr = "the activity endpoint responds after {int} milliseconds")]
async fn given_activity_delayed(world: &mut WidgetWorld, millis: u64) {
    let served = consecutive_days(7);
    let template = ResponseTemplate::new(200)
        .set_body_json(calendar_body(&served))
        .set_delay(Duration::from_millis(millis));
    world.served_days = served;
    world.serve_activity(template).await;
}

#[given(expr = "the activity endpoint fails with status {int} and error {string}")]
async fn given_activity_fails(world: &mut WidgetWorld, status: u16, error: String) {
    let template = ResponseTemplate::new(status).set_body_json(json!({ "error": error }));
    world.serve_activity(template).await;
}

#[given("the activity endpoint returns days out of order")]
async fn given_activity_unordered(world: &mut WidgetWorld) {
    let mut served = consecutive_days(3);
    served.swap(0, 2);
    let template = ResponseTemplate::new(200).set_body_json(calendar_body(&served));
    world.serve_activity(template).await;
}

#[given(expr = "the activity window is {int} days")]
async fn given_activity_window(world: &mut WidgetWorld, window: usize) {
    world.config.activity.window = window;
}

// === LIFECYCLE ===

#[when("the activity widget is mounted")]
async fn when_activity_mounted(world: &mut WidgetWorld) {
    world
        .run_dashboard(vec![WidgetId::Activity])
        .await
        .expect("dashboard run should succeed");
}

// === ASSERTIONS ===

#[then(expr = "the activity calendar shows {int} days")]
async fn then_calendar_shows_days(world: &mut WidgetWorld, days: usize) {
    let calendar = world.activity_view().content().expect("calendar content");
    assert_eq!(calendar.days().len(), days);
}

#[then(expr = "the first day shown is day {int} of the response")]
async fn then_first_day_is(world: &mut WidgetWorld, position: usize) {
    let calendar = world.activity_view().content().expect("calendar content");
    assert_eq!(calendar.days()[0], world.served_days[position - 1]);
}

#[then("the days shown are the most recent in chronological order")]
async fn then_days_chronological(world: &mut WidgetWorld) {
    let calendar = world.activity_view().content().expect("calendar content");
    let shown = calendar.days();
    let tail = &world.served_days[world.served_days.len() - shown.len()..];
    assert_eq!(shown, tail);
    assert!(shown.windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[then(expr = "the activity widget shows an error containing {string}")]
async fn then_activity_error(world: &mut WidgetWorld, text: String) {
    match world.activity_view() {
        WidgetView::Error { message } => assert!(
            message.contains(&text),
            "Expected {text:?} in error {message:?}"
        ),
        other => panic!("Expected error view, got {other:?}"),
    }
}

#[then("the activity widget shows an error")]
async fn then_activity_any_error(world: &mut WidgetWorld) {
    assert!(matches!(world.activity_view(), WidgetView::Error { .. }));
}

#[then("the first painted frame shows the activity widget loading")]
async fn then_first_frame_loading(world: &mut WidgetWorld) {
    let first = world
        .first_frame()
        .activity
        .as_ref()
        .expect("activity widget mounted");
    assert!(first.is_loading());
}

#[then(expr = "the activity endpoint was requested {int} time(s)")]
async fn then_activity_requested(world: &mut WidgetWorld, times: usize) {
    let requests = world
        .requested_paths()
        .await
        .into_iter()
        .filter(|path| path.starts_with("/v4/"))
        .count();
    assert_eq!(requests, times);
}
