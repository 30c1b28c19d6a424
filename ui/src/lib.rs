use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod actions;
pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod utils;

use pages::{AdminDashboardPage, NotFoundPage};

/// API client for the booking backend.
///
/// Uses `BACKEND_URL` when it was set at build time, otherwise the origin
/// the page was served from.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            web_sys::window().and_then(|window| window.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <AdminDashboardPage /> },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
