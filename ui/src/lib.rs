use payloads::TripId;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod browser;
pub mod components;
pub mod config;
pub mod contexts;
pub mod hooks;
pub mod invite;
mod logs;
pub mod pages;
pub mod scheduler;
mod trips;

use pages::{HomePage, NotFoundPage, TripPage};

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/trip/:id")]
    Trip { id: TripId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => html! { <HomePage /> },
        Route::Trip { id } => html! { <TripPage trip_id={id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {page}
        </main>
    }
}
