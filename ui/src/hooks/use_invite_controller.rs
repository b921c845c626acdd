use std::rc::Rc;

use payloads::TripId;
use yew::prelude::*;

use crate::config;
use crate::contexts::use_environment;
use crate::invite::{InviteController, InviteState};

/// State and controller for an invite modal on `trip_id`.
///
/// The controller is rebuilt when the trip or the environment changes;
/// timers belonging to the previous one are cancelled with it.
#[hook]
pub fn use_invite_controller(
    trip_id: &TripId,
) -> (UseReducerHandle<InviteState>, Rc<InviteController>) {
    let env = use_environment();
    let state = use_reducer(InviteState::default);
    let dispatcher = state.dispatcher();

    let controller = use_memo((trip_id.clone(), env), move |(trip_id, env)| {
        let origin = config::invite_origin(env.browser.as_ref());
        let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
        InviteController::new(env.clone(), trip_id.clone(), &origin, dispatch)
    });

    (state, controller)
}
