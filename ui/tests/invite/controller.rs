use std::time::Duration;

use futures::executor::block_on;
use payloads::TripId;
use test_helpers::{BrowserCall, CloseCounter, TestEnv, trip_id};
use trip_ui::browser::BrowserError;
use trip_ui::invite::{CopyOutcome, InviteAction};

const LINK: &str = "https://example.com/trip/abc123?invite=true";

#[test]
fn copy_puts_link_on_clipboard() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());

    let outcome = block_on(controller.copy_link());

    assert_eq!(outcome, CopyOutcome::Clipboard);
    assert_eq!(env.browser.clipboard().as_deref(), Some(LINK));
    assert_eq!(
        env.browser.calls(),
        vec![BrowserCall::WriteText(LINK.to_string())]
    );
    assert!(state.current().copied);
}

#[test]
fn copied_flag_resets_after_exactly_two_seconds() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());

    block_on(controller.copy_link());
    assert!(state.current().copied);

    env.scheduler.advance(Duration::from_millis(1999));
    assert!(state.current().copied);

    env.scheduler.advance(Duration::from_millis(1));
    assert!(!state.current().copied);
    assert_eq!(
        state.actions(),
        vec![InviteAction::Copied, InviteAction::CopyFeedbackExpired]
    );
}

#[test]
fn rejected_clipboard_falls_back_to_copy_command() {
    let env = TestEnv::new();
    env.browser
        .reject_clipboard(BrowserError::ClipboardRejected("denied".into()));
    let (controller, state) = env.controller(trip_id());

    let outcome = block_on(controller.copy_link());

    assert_eq!(outcome, CopyOutcome::Fallback);
    assert_eq!(
        env.browser.calls(),
        vec![
            BrowserCall::WriteText(LINK.to_string()),
            BrowserCall::FallbackCopy(LINK.to_string()),
        ]
    );
    assert_eq!(env.browser.clipboard().as_deref(), Some(LINK));
    assert!(state.current().copied);

    env.scheduler.advance(Duration::from_millis(2000));
    assert!(!state.current().copied);
}

#[test]
fn failed_fallback_still_reports_copied() {
    let env = TestEnv::new();
    env.browser.reject_clipboard(BrowserError::ClipboardUnavailable);
    env.browser.fail_fallback(BrowserError::CopyCommandRefused);
    let (controller, state) = env.controller(trip_id());

    let outcome = block_on(controller.copy_link());

    assert_eq!(outcome, CopyOutcome::FallbackFailed);
    assert_eq!(env.browser.clipboard(), None);
    assert!(state.current().copied);
}

#[test]
fn copying_again_restarts_feedback_timer() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());

    block_on(controller.copy_link());
    env.scheduler.advance(Duration::from_millis(1500));
    block_on(controller.copy_link());

    env.scheduler.advance(Duration::from_millis(1000));
    assert!(state.current().copied);
    assert_eq!(env.scheduler.pending(), 1);

    env.scheduler.advance(Duration::from_millis(1000));
    assert!(!state.current().copied);
    assert_eq!(env.scheduler.pending(), 0);
}

#[test]
fn open_in_new_tab_opens_invite_link() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());

    controller.open_in_new_tab();

    assert_eq!(
        env.browser.calls(),
        vec![BrowserCall::OpenNewTab(LINK.to_string())]
    );
    assert!(state.actions().is_empty());
}

#[test]
fn test_here_closes_then_navigates_after_delay() {
    let env = TestEnv::new();
    let (controller, _) = env.controller(trip_id());
    let closes = CloseCounter::default();

    controller.test_in_current_tab(&closes.callback());

    assert_eq!(closes.count(), 1);
    assert!(env.browser.navigations().is_empty());

    env.scheduler.advance(Duration::from_millis(99));
    assert!(env.browser.navigations().is_empty());

    env.scheduler.advance(Duration::from_millis(1));
    assert_eq!(
        env.browser.navigations(),
        vec!["/trip/abc123?invite=true&test=true".to_string()]
    );
}

#[test]
fn dropping_controller_cancels_pending_work() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());
    let closes = CloseCounter::default();

    block_on(controller.copy_link());
    controller.test_in_current_tab(&closes.callback());
    assert_eq!(env.scheduler.pending(), 2);

    drop(controller);
    env.scheduler.advance(Duration::from_secs(5));

    assert!(env.browser.navigations().is_empty());
    assert!(state.current().copied);
    assert_eq!(env.scheduler.pending(), 0);
}

#[test]
fn toggle_preview_twice_returns_to_hidden() {
    let env = TestEnv::new();
    let (controller, state) = env.controller(trip_id());

    controller.toggle_preview();
    assert!(state.current().show_email_preview);

    controller.toggle_preview();
    assert!(!state.current().show_email_preview);
    assert!(env.browser.calls().is_empty());
}

#[test]
fn link_uses_trip_id_as_given() {
    let env = TestEnv::new();
    let (controller, _) = env.controller(TripId::from("Kyoto-2026_v2"));

    block_on(controller.copy_link());

    assert_eq!(
        env.browser.clipboard().as_deref(),
        Some("https://example.com/trip/Kyoto-2026_v2?invite=true")
    );
}
