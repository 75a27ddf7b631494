use booking_view::{BookingDetails, DetailView, ViewState};
use payloads::{APIClient, RideDetail, RideId, Role};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, get_api_client};

/// What the booking details component renders from.
pub struct BookingDetailsHookReturn {
    pub state: ViewState,
    pub displayed_ride: Option<RideDetail>,
    pub can_view_contact: bool,
    /// Fetch a ride and open it in the overlay.
    pub inspect: Callback<RideId>,
    pub dismiss: Callback<()>,
}

/// Load the booking named by `booking_param` and keep it current.
///
/// The load re-runs whenever `booking_param` changes. Responses for a
/// booking the page has since moved away from are dropped by the view.
/// An unauthorized response navigates to [`Route::Unauthorized`].
#[hook]
pub fn use_booking_details(
    booking_param: AttrValue,
    role: Option<Role>,
) -> BookingDetailsHookReturn {
    let navigator = use_navigator();
    let force_update = use_force_update();

    let details: Rc<BookingDetails<APIClient>> = use_memo((), move |_| {
        let view = DetailView::with_listener(move || force_update.force_update());
        let redirect = move || match &navigator {
            Some(navigator) => navigator.push(&Route::Unauthorized),
            None => tracing::warn!("No router available for redirect"),
        };
        BookingDetails::with_view(view, get_api_client(), redirect, role)
    });

    {
        let details = details.clone();
        use_effect_with(booking_param, move |booking_param| {
            let booking_param = booking_param.to_string();
            yew::platform::spawn_local(async move {
                details.loader.load(&booking_param).await;
            });
        });
    }

    let inspect = {
        let details = details.clone();
        Callback::from(move |ride_id: RideId| {
            let details = details.clone();
            yew::platform::spawn_local(async move {
                details.inspector.inspect(ride_id).await;
            });
        })
    };

    let dismiss = {
        let details = details.clone();
        Callback::from(move |_: ()| details.inspector.dismiss())
    };

    BookingDetailsHookReturn {
        state: details.view.state(),
        displayed_ride: details.view.displayed_ride(),
        can_view_contact: details.can_view_contact(),
        inspect,
        dismiss,
    }
}
