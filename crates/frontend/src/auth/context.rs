//! Global authentication context and provider
//!
//! The context holds a [`SessionState`] and only ever changes by applying a
//! [`SessionEvent`]. The async operations below run the session controller and
//! dispatch whatever event it reports. An `Expired` event redirects to login.

use crate::app::Route;
use crate::client::session_controller;
use crate::storage::BrowserTokenStore;
use keyhold_core::{SessionEvent, SessionState, TokenStore, User};
use keyhold_http::SessionController;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContextData {
    pub session: SessionState,
}

impl AuthContextData {
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub const fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub const fn is_expired(&self) -> bool {
        self.session.is_expired()
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }
}

impl Reducible for AuthContextData {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let session = self.session.clone().apply(event);
        if session == self.session {
            return self;
        }
        Rc::new(Self { session })
    }
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
///
/// Must sit inside the router so an expired session can navigate to login.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(AuthContextData::default);
    let navigator = use_navigator();

    // Expired credentials always end on the login page, whichever page is open
    use_effect_with(auth.is_expired(), move |expired| {
        if *expired {
            if let Some(navigator) = navigator {
                info!("session expired, redirecting to login");
                navigator.push(&Route::Login);
            }
        }
    });

    // Resolve the stored tokens on mount
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            spawn_local(check(auth));
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Get the controller, or record why it is unavailable
fn controller_or_fail(auth: &AuthContext) -> Option<SessionController> {
    match session_controller() {
        Ok(controller) => Some(controller),
        Err(err) => {
            error!(error = %err, "api client unavailable");
            auth.dispatch(SessionEvent::Unauthenticated {
                error: Some(err.user_message()),
            });
            None
        }
    }
}

/// Turn stored tokens into a session at startup
pub async fn check(auth: AuthContext) {
    let Some(controller) = controller_or_fail(&auth) else {
        return;
    };
    auth.dispatch(controller.check().await);
}

/// Sign in; returns whether the user is now authenticated
pub async fn login(auth: AuthContext, username: String, password: String) -> bool {
    let Some(controller) = controller_or_fail(&auth) else {
        return false;
    };

    auth.dispatch(SessionEvent::Pending);
    let event = controller.login(&username, &password).await;
    let authenticated = matches!(event, SessionEvent::Authenticated(_));
    auth.dispatch(event);
    authenticated
}

/// Sign out locally
pub fn logout(auth: &AuthContext) {
    let event = match session_controller() {
        Ok(controller) => controller.logout(),
        Err(_) => {
            BrowserTokenStore.clear();
            SessionEvent::LoggedOut
        }
    };
    auth.dispatch(event);
}

/// Get a new access token and reload the profile
pub async fn refresh(auth: AuthContext) {
    let Some(controller) = controller_or_fail(&auth) else {
        return;
    };
    auth.dispatch(controller.refresh().await);
}

/// Reload the signed-in user's profile
pub async fn fetch_profile(auth: AuthContext) {
    let Some(controller) = controller_or_fail(&auth) else {
        return;
    };
    auth.dispatch(controller.fetch_profile().await);
}
