//! Top navigation bar

use crate::app::Route;
use crate::auth::{logout, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

const LINK_CLASSES: &str = "text-gray-200 hover:text-white px-3 py-2 rounded-md text-sm font-medium";

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| logout(&auth))
    };

    html! {
        <nav class="bg-gray-800">
            <ul class="flex items-center gap-2 px-4 py-3">
                <li>
                    <Link<Route> to={Route::Home} classes={LINK_CLASSES}>{"Home"}</Link<Route>>
                </li>
                if let Some(username) = auth.session.username().filter(|_| auth.is_authenticated()) {
                    <li>
                        <Link<Route> to={Route::Profile} classes={LINK_CLASSES}>
                            {format!("Profile ({username})")}
                        </Link<Route>>
                    </li>
                    <li>
                        <button onclick={on_logout} class={LINK_CLASSES}>{"Logout"}</button>
                    </li>
                } else {
                    <li>
                        <Link<Route> to={Route::Login} classes={LINK_CLASSES}>{"Login"}</Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Register} classes={LINK_CLASSES}>{"Register"}</Link<Route>>
                    </li>
                }
            </ul>
        </nav>
    }
}
