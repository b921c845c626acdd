//! Inline icons from the Lucide set (https://lucide.dev).
//!
//! Icons stroke with `currentColor`, so they pick up the text color of the
//! surrounding Tailwind classes. Default size is `w-4 h-4`.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_else(|| AttrValue::from("w-4 h-4"))]
    pub class: AttrValue,
}

fn lucide(class: &AttrValue, body: Html) -> Html {
    html! {
        <svg
            class={class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

#[function_component]
pub fn CloseIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    )
}

#[function_component]
pub fn CopyIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
                <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
            </>
        },
    )
}

#[function_component]
pub fn CheckIcon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <path d="M20 6 9 17l-5-5" /> })
}

/// Three connected nodes.
#[function_component]
pub fn ShareIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <circle cx="18" cy="5" r="3" />
                <circle cx="6" cy="12" r="3" />
                <circle cx="18" cy="19" r="3" />
                <line x1="8.59" x2="15.42" y1="13.51" y2="17.49" />
                <line x1="15.41" x2="8.59" y1="6.51" y2="10.49" />
            </>
        },
    )
}

#[function_component]
pub fn MailIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
    )
}

#[function_component]
pub fn UsersIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
    )
}

#[function_component]
pub fn BugIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <path d="m8 2 1.88 1.88" />
                <path d="M14.12 3.88 16 2" />
                <path d="M9 7.13v-1a3.003 3.003 0 1 1 6 0v1" />
                <path d="M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6" />
                <path d="M12 20v-9" />
                <path d="M6.53 9C4.6 8.8 3 7.1 3 5" />
                <path d="M6 13H2" />
                <path d="M3 21c0-2.1 1.7-3.9 3.8-4" />
                <path d="M20.97 5c0 2.1-1.6 3.8-3.5 4" />
                <path d="M22 13h-4" />
                <path d="M17.2 17c2.1.1 3.8 1.9 3.8 4" />
            </>
        },
    )
}

#[function_component]
pub fn ExternalLinkIcon(props: &IconProps) -> Html {
    lucide(
        &props.class,
        html! {
            <>
                <path d="M15 3h6v6" />
                <path d="M10 14 21 3" />
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            </>
        },
    )
}
