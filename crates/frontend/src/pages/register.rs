use super::{BUTTON_CLASSES, CredentialFields};
use crate::app::Route;
use crate::client;
use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let message = message.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            error.set(None);
            submitting.set(true);

            let username = username.clone();
            let password = password.clone();
            let message = message.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match client::register(&username, &password).await {
                    Ok(response) => {
                        info!(username = username.as_str(), "account registered");
                        message.set(Some(response.message));
                        username.set(String::new());
                        password.set(String::new());
                        if let Some(navigator) = navigator {
                            Timeout::new(AppConfig::REGISTER_REDIRECT_DELAY_MS, move || {
                                navigator.push(&Route::Login);
                            })
                            .forget();
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "registration failed");
                        error.set(Some(err.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-6 text-center">{"Register"}</h2>
            <form onsubmit={on_submit}>
                <CredentialFields username={username} password={password} />
                if let Some(message) = &*message {
                    <p class="text-green-600 text-sm mb-4">{message}</p>
                }
                if let Some(error) = &*error {
                    <p class="text-red-600 text-sm mb-4">{error}</p>
                }
                <button type="submit" class={BUTTON_CLASSES} disabled={*submitting}>
                    {"Register"}
                </button>
            </form>
        </div>
    }
}
