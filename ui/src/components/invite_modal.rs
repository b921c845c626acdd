use payloads::TripId;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::Modal;
use crate::components::icons::{
    BugIcon, CheckIcon, CloseIcon, CopyIcon, ExternalLinkIcon, MailIcon,
    ShareIcon, UsersIcon,
};
use crate::config::PRODUCT_NAME;
use crate::hooks::use_invite_controller;

#[derive(Properties, PartialEq)]
pub struct InviteModalProps {
    pub is_open: bool,
    /// Called by the backdrop, the header close button and "Done"
    pub on_close: Callback<()>,
    pub trip_id: TripId,
    pub trip_name: AttrValue,
}

/// Share a trip: copy its invite link, preview the invitation email, and
/// try the recipient flow.
///
/// Stays mounted while closed so pending work (the delayed test navigation)
/// survives the close it triggers.
#[function_component]
pub fn InviteModal(props: &InviteModalProps) -> Html {
    let (state, controller) = use_invite_controller(&props.trip_id);

    if !props.is_open {
        return html! {};
    }

    let invite_link = controller.invite_link().to_string();

    let on_copy = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.copy_link().await;
            });
        })
    };

    let on_open_new_tab = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.open_in_new_tab())
    };

    let on_test_here = {
        let controller = controller.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            controller.test_in_current_tab(&on_close);
        })
    };

    let on_toggle_preview = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.toggle_preview())
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    let copy_button_class = classes!(
        "btn-secondary",
        "flex",
        "items-center",
        "space-x-2",
        "transition-all",
        state
            .copied
            .then_some("bg-green-50 text-green-700 border-green-200"),
    );

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-lg">
            // Header
            <div class="flex items-center justify-between p-6 border-b border-gray-100">
                <div>
                    <h2 class="text-xl font-bold text-gray-800 flex items-center">
                        <ShareIcon class="w-5 h-5 mr-2 text-adventure-500" />
                        {"Invite Friends"}
                    </h2>
                    <p class="text-gray-600 text-sm mt-1">
                        {format!("Share \"{}\" with your travel buddies", props.trip_name)}
                    </p>
                </div>
                <button
                    onclick={on_close_click.clone()}
                    class="p-2 rounded-xl hover:bg-gray-100 transition-colors"
                    title="Close"
                >
                    <CloseIcon class="w-5 h-5 text-gray-500" />
                </button>
            </div>

            <div class="p-6 space-y-6">
                <div>
                    <h3 class="font-semibold text-gray-800 mb-3">{"Share Link"}</h3>
                    <div class="flex items-center space-x-3">
                        <div class="flex-1 p-3 bg-gray-50 rounded-xl border">
                            <p class="text-sm text-gray-600 font-mono truncate">
                                {&invite_link}
                            </p>
                        </div>
                        <button onclick={on_copy} class={copy_button_class}>
                            if state.copied {
                                <CheckIcon />
                                <span>{"Copied!"}</span>
                            } else {
                                <CopyIcon />
                                <span>{"Copy"}</span>
                            }
                        </button>
                    </div>
                </div>

                <div class="bg-yellow-50 rounded-xl p-4 border border-yellow-200">
                    <div class="flex items-start space-x-3">
                        <BugIcon class="w-5 h-5 text-yellow-600 mt-0.5" />
                        <div class="flex-1">
                            <h4 class="font-medium text-yellow-800 mb-2">{"Test Invite Flow"}</h4>
                            <p class="text-sm text-yellow-700 mb-3">
                                {"Test how the invite experience works for new users:"}
                            </p>
                            <div class="flex flex-col sm:flex-row gap-2">
                                <button
                                    onclick={on_open_new_tab}
                                    class="btn-secondary text-sm bg-yellow-100 border-yellow-300 text-yellow-800 hover:bg-yellow-200 flex items-center space-x-2"
                                >
                                    <ExternalLinkIcon class="w-3 h-3" />
                                    <span>{"Open in New Tab"}</span>
                                </button>
                                <button
                                    onclick={on_test_here}
                                    class="btn-secondary text-sm bg-yellow-100 border-yellow-300 text-yellow-800 hover:bg-yellow-200"
                                >
                                    {"🧪 Test Here"}
                                </button>
                            </div>
                            <p class="text-xs text-yellow-600 mt-2">
                                {"💡 \"New Tab\" preserves your current session, \"Test Here\" simulates a new user"}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="bg-blue-50 rounded-xl p-4 border border-blue-200">
                    <h4 class="font-medium text-blue-800 mb-2">{"🔧 Debug Info"}</h4>
                    <div class="text-xs text-blue-700 space-y-1">
                        <div>
                            {"Trip ID: "}
                            <code class="bg-blue-100 px-1 rounded">{controller.trip_id().to_string()}</code>
                        </div>
                        <div>
                            {"Current URL: "}
                            <code class="bg-blue-100 px-1 rounded">{controller.current_href()}</code>
                        </div>
                        <div>
                            {"Invite Link: "}
                            <code class="bg-blue-100 px-1 rounded break-all">{&invite_link}</code>
                        </div>
                    </div>
                </div>

                <div>
                    <div class="flex items-center justify-between mb-3">
                        <h3 class="font-semibold text-gray-800">{"Email Preview"}</h3>
                        <button
                            onclick={on_toggle_preview}
                            class="text-sm text-adventure-600 hover:text-adventure-700 font-medium"
                        >
                            {if state.show_email_preview { "Hide Preview" } else { "Show Preview" }}
                        </button>
                    </div>

                    if state.show_email_preview {
                        <EmailPreview trip_name={props.trip_name.clone()} />
                    }
                </div>

                <HowItWorks />
            </div>

            <div class="px-6 pb-6">
                <button onclick={on_close_click} class="w-full btn-primary">
                    {"Done"}
                </button>
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct EmailPreviewProps {
    trip_name: AttrValue,
}

/// Static mock of the invitation a recipient would receive.
#[function_component]
fn EmailPreview(props: &EmailPreviewProps) -> Html {
    html! {
        <div class="bg-gray-50 rounded-xl p-4 border animate-slide-up">
            <div class="bg-white rounded-lg p-4 shadow-sm">
                <div class="flex items-center space-x-2 mb-3">
                    <MailIcon class="w-4 h-4 text-blue-500" />
                    <span class="text-sm font-medium text-gray-700">{"Trip Invitation"}</span>
                </div>

                <h4 class="font-semibold text-gray-800 mb-2">
                    {format!("You're invited to join \"{}\"!", props.trip_name)}
                </h4>

                <p class="text-sm text-gray-600 mb-4">
                    {"Hey! I'm planning an awesome trip and would love for you to join. \
                      Click the link below to see the itinerary and add your own ideas."}
                </p>

                <div class="bg-gradient-to-r from-adventure-500 to-wanderlust-500 text-white rounded-lg p-3 text-center">
                    <span class="text-sm font-medium">{"Join Trip →"}</span>
                </div>

                <p class="text-xs text-gray-500 mt-3">
                    {format!("This invitation was sent through {PRODUCT_NAME}")}
                </p>
            </div>
        </div>
    }
}

#[function_component]
fn HowItWorks() -> Html {
    const STEPS: [&str; 4] = [
        "Share the link with your friends",
        "They'll enter their name to join",
        "Everyone can add and edit activities",
        "Costs are tracked automatically",
    ];

    html! {
        <div class="bg-gradient-to-r from-wanderlust-50 to-adventure-50 rounded-xl p-4">
            <div class="flex items-start space-x-3">
                <UsersIcon class="w-5 h-5 text-wanderlust-600 mt-0.5" />
                <div>
                    <h4 class="font-medium text-gray-800 mb-1">{"How it works"}</h4>
                    <ul class="text-sm text-gray-600 space-y-1">
                        {for STEPS.iter().map(|step| html! { <li>{format!("• {step}")}</li> })}
                    </ul>
                </div>
            </div>
        </div>
    }
}
