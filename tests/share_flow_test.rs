//! Share/export fallback chain through the App.

mod common;

use std::time::{Duration, Instant};

use common::{provider_response, sample_result, TestApp};
use mindspoke::adapters::mock::{
    MockClipboard, MockNativeShare, MockRasterizer, NativeShareBehavior, RasterBehavior,
};
use mindspoke::share::{compose_share_text, COPIED_FEEDBACK, SHARE_TITLE};

async fn with_result(mut t: TestApp) -> TestApp {
    t.http.set_default_response(provider_response(&sample_result()));
    t.app.trigger_generate();
    t.pump().await;
    assert!(t.app.can_share());
    t
}

async fn share(t: &mut TestApp) {
    assert!(t.app.trigger_share());
    t.pump().await;
}

#[tokio::test]
async fn test_native_share_does_not_touch_clipboard() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Image),
        MockNativeShare::new(),
        MockClipboard::new(),
    ))
    .await;
    share(&mut t).await;

    let shared = t.native.shared();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, SHARE_TITLE);
    assert_eq!(shared[0].text, compose_share_text(&sample_result()));
    assert_eq!((shared[0].image.width, shared[0].image.height), (1080, 1080));
    assert!(t.clipboard.writes().is_empty());
    assert!(!t.app.share_status.is_copied());
    assert!(t.app.share_status.alert().is_none());
}

#[tokio::test]
async fn test_no_native_share_copies_and_reverts() {
    let mut t = with_result(TestApp::new()).await;
    share(&mut t).await;

    assert_eq!(t.clipboard.writes(), vec![compose_share_text(&sample_result())]);
    assert!(t.app.share_status.is_copied());

    let now = Instant::now();
    t.app.tick_at(now + Duration::from_millis(1000));
    assert!(t.app.share_status.is_copied());
    t.app.tick_at(now + COPIED_FEEDBACK + Duration::from_millis(10));
    assert!(!t.app.share_status.is_copied());
}

#[tokio::test]
async fn test_cancelled_share_changes_nothing() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Image),
        MockNativeShare::new().with_behavior(NativeShareBehavior::Cancel),
        MockClipboard::new(),
    ))
    .await;
    share(&mut t).await;

    assert_eq!(t.native.share_count(), 1);
    assert!(t.clipboard.writes().is_empty());
    assert!(!t.app.share_status.is_copied());
    assert!(t.app.share_status.alert().is_none());
    assert!(!t.app.share_status.is_busy());
}

#[tokio::test]
async fn test_declined_file_falls_back_to_clipboard() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Image),
        MockNativeShare::new().rejecting_files(),
        MockClipboard::new(),
    ))
    .await;
    share(&mut t).await;

    assert_eq!(t.native.share_count(), 0);
    assert_eq!(t.clipboard.writes().len(), 1);
    assert!(t.app.share_status.is_copied());
}

#[tokio::test]
async fn test_no_image_falls_back_to_clipboard() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Nothing),
        MockNativeShare::new(),
        MockClipboard::new(),
    ))
    .await;
    share(&mut t).await;

    assert_eq!(t.rasterizer.calls(), 1);
    assert_eq!(t.native.share_count(), 0);
    assert_eq!(t.clipboard.writes().len(), 1);
}

#[tokio::test]
async fn test_native_failure_falls_back_to_clipboard() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Image),
        MockNativeShare::new().with_behavior(NativeShareBehavior::Fail("no handler".into())),
        MockClipboard::new(),
    ))
    .await;
    share(&mut t).await;

    assert_eq!(t.native.share_count(), 1);
    assert_eq!(t.clipboard.writes().len(), 1);
    assert!(t.app.share_status.is_copied());
}

#[tokio::test]
async fn test_clipboard_failure_raises_alert() {
    let mut t = with_result(TestApp::with_share(
        MockRasterizer::new(RasterBehavior::Error("render failed".into())),
        MockNativeShare::unavailable(),
        MockClipboard::failing("no clipboard available"),
    ))
    .await;
    share(&mut t).await;

    let alert = t.app.share_status.alert().unwrap();
    assert!(alert.contains("no clipboard available"));
    assert!(!t.app.share_status.is_copied());
}

#[tokio::test]
async fn test_share_requires_result_and_is_exclusive() {
    let mut t = TestApp::new();
    assert!(!t.app.trigger_share());

    let mut t = with_result(t).await;
    assert!(t.app.trigger_share());
    assert!(!t.app.can_share());
    assert!(!t.app.trigger_share());
    t.pump().await;
    assert_eq!(t.clipboard.writes().len(), 1);
}
