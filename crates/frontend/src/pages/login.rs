use super::{BUTTON_CLASSES, CredentialFields};
use crate::app::Route;
use crate::auth::{login, use_auth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_submit = {
        let auth = auth.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            spawn_local(async move {
                if login(auth, username, password).await {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Profile);
                    }
                }
            });
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-6 text-center">{"Login"}</h2>
            <form onsubmit={on_submit}>
                <CredentialFields username={username} password={password} />
                if let Some(error) = auth.error() {
                    <p class="text-red-600 text-sm mb-4">{error}</p>
                }
                <button type="submit" class={BUTTON_CLASSES} disabled={auth.is_loading()}>
                    {"Login"}
                </button>
            </form>
        </div>
    }
}
