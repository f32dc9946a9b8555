use crate::app::Route;
use crate::auth::use_auth;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth();

    html! {
        <div class="text-center">
            <h1 class="text-3xl font-bold text-gray-800 mb-4">{"Welcome to Keyhold"}</h1>
            if let Some(username) = auth.session.username() {
                <p class="text-gray-600">{format!("Signed in as {username}.")}</p>
            } else if !auth.is_loading() {
                <p class="text-gray-600">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Log in"}</Link<Route>>
                    {" or "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">{"create an account"}</Link<Route>>
                    {" to see your profile."}
                </p>
            }
        </div>
    }
}
