use booking_view::{Messages, navigation};
use payloads::BookingId;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BookingNavigationProps {
    pub lang: AttrValue,
    pub booking_id: BookingId,
    pub messages: Rc<Messages>,
}

/// Previous/next links between neighbouring booking ids.
///
/// "Next" is always offered; the next page shows not-found past the end.
#[function_component]
pub fn BookingNavigation(props: &BookingNavigationProps) -> Html {
    let adjacent = navigation::adjacent(props.booking_id);
    let to = |booking_id: BookingId| Route::BookingDetails {
        lang: props.lang.to_string(),
        id: booking_id.to_string(),
    };
    let link_class = "px-3 py-2 text-sm font-medium rounded-md border \
                      border-neutral-300 dark:border-neutral-600 \
                      text-neutral-700 dark:text-neutral-300 \
                      hover:bg-neutral-50 dark:hover:bg-neutral-700";

    html! {
        <nav class="flex items-center justify-between mb-6">
            if let Some(previous) = adjacent.previous {
                <Link<Route> to={to(previous)} classes={link_class}>
                    {format!("← {}", props.messages.translate("pick", "previous"))}
                </Link<Route>>
            } else {
                <span />
            }
            <Link<Route> to={to(adjacent.next)} classes={link_class}>
                {format!("{} →", props.messages.translate("pick", "next"))}
            </Link<Route>>
        </nav>
    }
}
