use payloads::TripId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::trips::DEMO_TRIPS;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-800 dark:text-white">{"Your Trips"}</h1>
            <ul class="space-y-3">
                {for DEMO_TRIPS.iter().map(|trip| html! {
                    <li key={trip.id}>
                        <Link<Route>
                            to={Route::Trip { id: TripId::from(trip.id) }}
                            classes="block p-4 rounded-xl border border-gray-200 hover:bg-gray-50 dark:border-neutral-700 dark:hover:bg-neutral-800 transition-colors"
                        >
                            <span class="font-medium">{trip.name}</span>
                        </Link<Route>>
                    </li>
                })}
            </ul>
        </div>
    }
}
