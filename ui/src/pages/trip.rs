use payloads::{InviteQuery, TripId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::InviteModal;
use crate::trips::trip_name;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub trip_id: TripId,
}

/// A trip, with the invite modal for sharing it. Arriving through an invite
/// link adds a join banner above the trip header.
#[function_component]
pub fn TripPage(props: &Props) -> Html {
    let invite_open = use_state(|| false);
    let query = use_location()
        .and_then(|location| location.query::<InviteQuery>().ok())
        .unwrap_or_default();
    let name = AttrValue::from(trip_name(&props.trip_id));

    let on_open = {
        let invite_open = invite_open.clone();
        Callback::from(move |_: MouseEvent| invite_open.set(true))
    };

    let on_close = {
        let invite_open = invite_open.clone();
        Callback::from(move |_: ()| invite_open.set(false))
    };

    html! {
        <div class="space-y-6">
            if query.invite {
                <JoinBanner trip_name={name.clone()} test={query.test} />
            }

            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-800 dark:text-white">{name.clone()}</h1>
                <button onclick={on_open} class="btn-primary">
                    {"Invite Friends"}
                </button>
            </div>

            <InviteModal
                is_open={*invite_open}
                on_close={on_close}
                trip_id={props.trip_id.clone()}
                trip_name={name}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct JoinBannerProps {
    trip_name: AttrValue,
    test: bool,
}

#[function_component]
fn JoinBanner(props: &JoinBannerProps) -> Html {
    html! {
        <div class="p-4 rounded-xl bg-gradient-to-r from-wanderlust-50 to-adventure-50 border border-adventure-200">
            <p class="font-medium text-gray-800">
                {format!("You've been invited to join \"{}\"", props.trip_name)}
            </p>
            <p class="text-sm text-gray-600 mt-1">
                {"Enter your name to join and start adding activities."}
            </p>
            if props.test {
                <p class="text-xs text-yellow-700 mt-2">{"🧪 Test mode: showing the join flow as a new user would see it"}</p>
            }
        </div>
    }
}
