//! Authentication guard component for protected routes

use crate::app::Route;
use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Render children only for an authenticated session, otherwise go to login
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth();

    if auth.is_loading() {
        return html! {
            <LoadingSpinner text={Some("Loading authentication...".to_string())} />
        };
    }

    if !auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! { <>{ props.children.clone() }</> }
}
