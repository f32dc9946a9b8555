//! Routed pages

mod home;
mod login;
mod not_found;
mod profile;
mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;

use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";
const BUTTON_CLASSES: &str = "w-full px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition-colors disabled:bg-gray-300 disabled:cursor-not-allowed";

/// Callback that mirrors an input's value into `state`
fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
struct CredentialFieldsProps {
    username: UseStateHandle<String>,
    password: UseStateHandle<String>,
}

/// Username and password inputs shared by the login and register forms
#[function_component(CredentialFields)]
fn credential_fields(props: &CredentialFieldsProps) -> Html {
    html! {
        <>
            <div class="mb-4">
                <label for="username" class="block text-sm font-medium text-gray-700 mb-2">{"Username:"}</label>
                <input
                    type="text"
                    id="username"
                    class={INPUT_CLASSES}
                    value={(*props.username).clone()}
                    oninput={bind_input(&props.username)}
                    required=true
                />
            </div>
            <div class="mb-6">
                <label for="password" class="block text-sm font-medium text-gray-700 mb-2">{"Password:"}</label>
                <input
                    type="password"
                    id="password"
                    class={INPUT_CLASSES}
                    value={(*props.password).clone()}
                    oninput={bind_input(&props.password)}
                    required=true
                />
            </div>
        </>
    }
}
