use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">{"Back to Home"}</Link<Route>>
        </div>
    }
}
