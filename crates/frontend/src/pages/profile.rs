use crate::auth::{fetch_profile, refresh, use_auth};
use crate::components::LoadingSpinner;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();

    // Reload the profile so the page never shows a stale record
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            spawn_local(fetch_profile(auth));
        });
    }

    let on_refresh = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_local(refresh(auth.clone()));
        })
    };

    let Some(user) = auth.user() else {
        return html! { <LoadingSpinner text={Some("Loading profile...".to_string())} /> };
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">{"User Profile"}</h2>
            <p class="mb-2"><strong>{"Username: "}</strong>{user.username.clone()}</p>
            <p class="mb-6"><strong>{"User ID: "}</strong>{user.id}</p>
            <button
                class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-700 rounded-md transition-colors"
                onclick={on_refresh}
            >
                {"Refresh session"}
            </button>
        </div>
    }
}
