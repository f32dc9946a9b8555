//! Busy indicator shown while the session resolves

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Status line under the dots; also read out by screen readers
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let label = props.text.clone().unwrap_or_else(|| "Loading...".to_string());

    html! {
        <section role="status" aria-live="polite" class="flex flex-col items-center gap-3 py-12">
            <div class="flex gap-1.5" aria-hidden="true">
                { for (0..3).map(|i| html! {
                    <span
                        class="block h-2.5 w-2.5 rounded-full bg-blue-500 animate-bounce"
                        style={format!("animation-delay: {}ms", i * 150)}
                    />
                }) }
            </div>
            if props.text.is_some() {
                <p class="text-sm text-gray-500">{label}</p>
            } else {
                <span class="sr-only">{label}</span>
            }
        </section>
    }
}
