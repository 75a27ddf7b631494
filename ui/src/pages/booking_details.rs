use booking_view::Messages;
use payloads::BookingId;
use yew::prelude::*;

use crate::components::{BookingDetails, BookingNavigation};
use crate::hooks::use_title;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: AttrValue,
    pub id: AttrValue,
}

#[function_component]
pub fn BookingDetailsPage(props: &Props) -> Html {
    // Read once per mount; the session does not change under an open page.
    let role = use_memo((), |_| session::role_from_cookie());
    let messages = use_memo(props.lang.clone(), |lang| Messages::for_lang(lang));
    let booking_id = BookingId::from_route_param(&props.id).ok();

    use_title(format!(
        "{} {}",
        messages.translate("pick", "booking"),
        props.id
    ));

    html! {
        <div>
            if let Some(booking_id) = booking_id {
                <BookingNavigation
                    lang={props.lang.clone()}
                    booking_id={booking_id}
                    messages={messages.clone()}
                />
            }
            <BookingDetails
                booking_param={props.id.clone()}
                role={(*role).clone()}
                messages={messages}
            />
        </div>
    }
}
