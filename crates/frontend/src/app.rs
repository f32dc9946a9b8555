use crate::auth::AuthProvider;
use crate::auth_guard::ProtectedRoute;
use crate::components::Navbar;
use crate::pages::{HomePage, LoginPage, NotFoundPage, ProfilePage, RegisterPage};
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Profile => html! {
            <ProtectedRoute>
                <ProfilePage />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="min-h-screen bg-gray-50">
                    <Navbar />
                    <main class="max-w-md mx-auto px-4 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}
