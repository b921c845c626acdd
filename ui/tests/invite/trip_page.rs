use payloads::TripId;
use test_helpers::{TRIP_ID, TestEnv};
use trip_ui::contexts::Environment;
use trip_ui::pages::TripPage;
use yew::ServerRenderer;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

const JOIN_BANNER: &str = "Enter your name to join";
const TEST_MODE: &str = "Test mode";

#[derive(Properties, PartialEq)]
struct PageHarnessProps {
    path: AttrValue,
}

/// A trip page under a router already sitting at `path`.
#[function_component]
fn PageHarness(props: &PageHarnessProps) -> Html {
    let env = use_memo((), |_| TestEnv::new());
    let history = use_memo(props.path.clone(), |path| {
        AnyHistory::from(MemoryHistory::with_entries(vec![path.to_string()]))
    });

    html! {
        <Router history={(*history).clone()}>
            <ContextProvider<Environment> context={env.environment()}>
                <TripPage trip_id={TripId::from(TRIP_ID)} />
            </ContextProvider<Environment>>
        </Router>
    }
}

async fn render_at(path: &'static str) -> String {
    ServerRenderer::<PageHarness>::with_props(move || PageHarnessProps {
        path: AttrValue::from(path),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn test_link_shows_banner_in_test_mode() {
    let html = render_at("/trip/abc123?invite=true&test=true").await;

    assert!(html.contains(JOIN_BANNER));
    assert!(html.contains(TEST_MODE));
}

#[tokio::test]
async fn invite_link_shows_banner_without_test_mode() {
    let html = render_at("/trip/abc123?invite=true").await;

    assert!(html.contains(JOIN_BANNER));
    assert!(!html.contains(TEST_MODE));
}

#[tokio::test]
async fn plain_trip_url_has_no_banner() {
    let html = render_at("/trip/abc123").await;

    assert!(!html.contains(JOIN_BANNER));
    assert!(!html.contains(TEST_MODE));
    // the share button is always there
    assert!(html.contains("Invite Friends"));
}

#[tokio::test]
async fn malformed_invite_flag_is_ignored() {
    let html = render_at("/trip/abc123?invite=1").await;

    assert!(!html.contains(JOIN_BANNER));
}

#[tokio::test]
async fn modal_starts_closed_on_trip_page() {
    let html = render_at("/trip/abc123?invite=true").await;

    assert!(!html.contains("role=\"dialog\""));
}
