use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod session;

use pages::{BookingDetailsPage, NotFoundPage, UnauthorizedPage};

/// API client for the configured backend, or the page's own origin.
pub fn get_api_client() -> APIClient {
    // Set at build time
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    /// `id` is the raw segment; the page validates it.
    #[at("/:lang/booking_details/:id")]
    BookingDetails { lang: String, id: String },
    #[at("/unauthorized")]
    Unauthorized,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::BookingDetails { lang, id } => html! {
            <BookingDetailsPage lang={lang} id={id} />
        },
        Route::Unauthorized => html! { <UnauthorizedPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {page}
        </main>
    }
}
