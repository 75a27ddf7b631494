use crate::view::DetailView;
use crate::{BookingSource, Redirect};
use payloads::RideId;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Fetches single rides into the view's display slot on request.
pub struct RideInspector<S> {
    source: Rc<S>,
    view: DetailView,
    redirect: Rc<dyn Redirect>,
}

impl<S: BookingSource> RideInspector<S> {
    pub fn new(
        source: Rc<S>,
        view: DetailView,
        redirect: Rc<dyn Redirect>,
    ) -> Self {
        Self {
            source,
            view,
            redirect,
        }
    }

    /// Fetch a ride of the active booking and display it.
    ///
    /// A 404 turns the whole page into the not-found view. Other failures
    /// leave the slot as it was. Returns whether anything was applied.
    pub async fn inspect(&self, ride_id: RideId) -> bool {
        let Some(ticket) = self.view.current_ticket() else {
            debug!(%ride_id, "No active booking to inspect a ride of");
            return false;
        };
        let booking_id = ticket.booking_id;

        match self.source.ride(booking_id, ride_id).await {
            Ok(ride) => {
                let applied = self.view.show_ride(ticket, ride);
                if !applied {
                    debug!(%booking_id, %ride_id, "Discarding stale ride");
                }
                applied
            }
            Err(e) if e.is_unauthorized() => {
                if !self.view.is_current(ticket) {
                    return false;
                }
                info!(%booking_id, %ride_id, "Session unauthorized, redirecting");
                self.redirect.unauthorized();
                true
            }
            Err(e) if e.is_not_found() => self.view.mark_not_found(ticket),
            Err(e) => {
                warn!(%booking_id, %ride_id, "Ignoring ride detail failure: {e}");
                false
            }
        }
    }

    /// Hide the displayed ride.
    pub fn dismiss(&self) {
        self.view.dismiss_ride();
    }
}
