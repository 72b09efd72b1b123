//! Step definitions for the now-playing widget

use crate::common::world::WidgetWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use livewidget::{NowPlayingView, WidgetId, WidgetView, IMAGE_PROXY_PATH};
use serde_json::json;
use wiremock::ResponseTemplate;

#[given("the now-playing endpoint returns:")]
async fn given_now_playing_body(world: &mut WidgetWorld, step: &Step) {
    let body = step.docstring.as_deref().expect("docstring body").trim();
    let template = ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json");
    world.serve_now_playing(template).await;
}

#[given(expr = "the now-playing endpoint fails with status {int} and error {string}")]
async fn given_now_playing_fails(world: &mut WidgetWorld, status: u16, error: String) {
    let template = ResponseTemplate::new(status).set_body_json(json!({ "error": error }));
    world.serve_now_playing(template).await;
}

#[given(expr = "the now-playing endpoint fails with status {int} and body:")]
async fn given_now_playing_error_page(world: &mut WidgetWorld, status: u16, step: &Step) {
    let body = step.docstring.as_deref().expect("docstring body").trim();
    let template = ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/html");
    world.serve_now_playing(template).await;
}

#[given("the now-playing origin is unreachable")]
async fn given_now_playing_unreachable(world: &mut WidgetWorld) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let address = listener.local_addr().expect("local address");
    drop(listener);
    world.config.now_playing.origin = format!("http://{address}");
}

#[when("the now-playing widget is mounted")]
async fn when_now_playing_mounted(world: &mut WidgetWorld) {
    world
        .run_dashboard(vec![WidgetId::NowPlaying])
        .await
        .expect("dashboard run should succeed");
}

#[then("the now-playing widget shows the idle card")]
async fn then_idle_card(world: &mut WidgetWorld) {
    assert_eq!(
        world.now_playing_view(),
        &WidgetView::Content(NowPlayingView::Idle)
    );
}

#[then(expr = "the now-playing widget shows {string} by {string}")]
async fn then_track_shown(world: &mut WidgetWorld, expected_title: String, expected_artist: String) {
    match world.now_playing_view() {
        WidgetView::Content(NowPlayingView::Playing { title, artist, .. }) => {
            assert_eq!(title, &expected_title);
            assert_eq!(artist, &expected_artist);
        }
        other => panic!("Expected playing card, got {other:?}"),
    }
}

#[then(expr = "the album art source is {string}")]
async fn then_album_art_source(world: &mut WidgetWorld, expected: String) {
    match world.now_playing_view() {
        WidgetView::Content(NowPlayingView::Playing { art_src, .. }) => {
            assert_eq!(art_src, &expected)
        }
        other => panic!("Expected playing card, got {other:?}"),
    }
}

#[then(expr = "the now-playing widget shows an error containing {string}")]
async fn then_now_playing_error(world: &mut WidgetWorld, text: String) {
    match world.now_playing_view() {
        WidgetView::Error { message } => assert!(
            message.contains(&text),
            "Expected {text:?} in error {message:?}"
        ),
        other => panic!("Expected error view, got {other:?}"),
    }
}

#[then("no album art was requested")]
async fn then_no_art_requested(world: &mut WidgetWorld) {
    let paths = world.requested_paths().await;
    assert!(!paths.is_empty());
    assert!(paths.iter().all(|path| !path.starts_with(IMAGE_PROXY_PATH)));
    assert!(!world.last_frame().plain_text().contains("Art:"));
}
