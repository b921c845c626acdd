use payloads::TripId;
use test_helpers::{TRIP_ID, TestEnv};
use trip_ui::components::InviteModal;
use trip_ui::contexts::Environment;
use yew::prelude::*;
use yew::ServerRenderer;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    is_open: bool,
}

/// Mounts the modal against fakes, the way a trip page would.
#[function_component]
fn Harness(props: &HarnessProps) -> Html {
    let env = use_memo((), |_| TestEnv::new());
    let environment = env.environment();

    html! {
        <ContextProvider<Environment> context={environment}>
            <InviteModal
                is_open={props.is_open}
                on_close={Callback::from(|_: ()| ())}
                trip_id={TripId::from(TRIP_ID)}
                trip_name="Kyoto in Autumn"
            />
        </ContextProvider<Environment>>
    }
}

async fn render(is_open: bool) -> String {
    ServerRenderer::<Harness>::with_props(move || HarnessProps { is_open })
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn closed_modal_renders_no_dialog() {
    let html = render(false).await;

    assert!(!html.contains("role=\"dialog\""));
    assert!(!html.contains("Invite Friends"));
}

#[tokio::test]
async fn open_modal_shows_link_and_controls() {
    let html = render(true).await;

    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Invite Friends"));
    assert!(html.contains("https://example.com/trip/abc123?invite=true"));
    assert!(html.contains("Open in New Tab"));
    assert!(html.contains("Done"));
    // current url from the fake browser, shown in the debug block
    assert!(html.contains("https://example.com/trip/abc123<"));
}

#[tokio::test]
async fn email_preview_starts_hidden() {
    let html = render(true).await;

    assert!(html.contains("Show Preview"));
    assert!(!html.contains("Trip Invitation"));
}
