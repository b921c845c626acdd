mod controller;
mod render;
mod trip_page;

use test_helpers::{ORIGIN, TestEnv, trip_id};
use trip_ui::config;

#[test]
fn invite_origin_comes_from_page() {
    let env = TestEnv::new();

    let origin = config::invite_origin(env.browser.as_ref());

    match config::PUBLIC_ORIGIN {
        Some(configured) => {
            assert_eq!(origin, configured.trim_end_matches('/'))
        }
        None => assert_eq!(origin, ORIGIN),
    }
}

#[test]
fn controller_builds_link_from_origin_and_trip() {
    let env = TestEnv::new();
    let (controller, _) = env.controller(trip_id());

    assert_eq!(
        controller.invite_link(),
        "https://example.com/trip/abc123?invite=true"
    );
}
