mod client;
mod details;

use booking_view::BookingDetails;
use payloads::APIClient;
use std::cell::Cell;
use std::rc::Rc;

/// Page controller over HTTP, counting redirects.
pub fn details_for(
    client: &APIClient,
) -> (BookingDetails<APIClient>, Rc<Cell<usize>>) {
    let redirects = Rc::new(Cell::new(0));
    let details = {
        let redirects = redirects.clone();
        BookingDetails::new(
            client.clone(),
            move || redirects.set(redirects.get() + 1),
            None,
        )
    };
    (details, redirects)
}
