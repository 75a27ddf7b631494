use yew::prelude::*;

use crate::hooks::use_title;

/// Where the booking page sends a session the API rejected.
#[function_component]
pub fn UnauthorizedPage() -> Html {
    use_title("Unauthorized".to_string());

    html! {
        <div class="text-center py-12">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"401"}</h1>
            <p class="text-gray-600 dark:text-gray-300">
                {"You are not authorized to view this page. Please sign in again."}
            </p>
        </div>
    }
}
