use crate::view::{DetailView, LoadedBooking, ViewState};
use crate::{BookingSource, Redirect};
use payloads::{BookingId, BookingRecord, ClientError, RideList};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Loads a booking and its rides into a [`DetailView`].
pub struct BookingLoader<S> {
    source: Rc<S>,
    view: DetailView,
    redirect: Rc<dyn Redirect>,
}

impl<S: BookingSource> BookingLoader<S> {
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

    /// Load the booking named by a raw route parameter.
    ///
    /// Returns false if a newer load superseded this one before it settled,
    /// in which case nothing was applied.
    pub async fn load(&self, route_param: &str) -> bool {
        match BookingId::from_route_param(route_param) {
            Ok(booking_id) => self.load_id(booking_id).await,
            Err(e) => {
                debug!("{e}");
                self.view.mark_invalid();
                true
            }
        }
    }

    pub async fn load_id(&self, booking_id: BookingId) -> bool {
        let ticket = self.view.begin_load(booking_id);
        debug!(%booking_id, generation = ticket.generation, "Loading booking");

        // Both requests are in flight before either is awaited.
        let (details, rides) = futures::join!(
            self.source.booking(booking_id),
            self.source.rides(booking_id)
        );

        let state = classify(details, rides);
        let unauthorized = state == ViewState::Unauthorized;
        if !self.view.apply(ticket, state) {
            debug!(
                %booking_id,
                generation = ticket.generation,
                "Discarding response for superseded load"
            );
            return false;
        }

        if unauthorized {
            info!(%booking_id, "Session unauthorized, redirecting");
            self.redirect.unauthorized();
        }
        true
    }
}

/// Decide the view state once both responses have settled.
///
/// A 401 from either request wins, then a 404 on the details. Any other
/// details failure is a load failure. When the details arrived, a ride list
/// answered with another error status reads as empty; a ride list that never
/// arrived or could not be decoded is a load failure.
pub fn classify(
    details: Result<BookingRecord, ClientError>,
    rides: Result<RideList, ClientError>,
) -> ViewState {
    let unauthorized = |e: Option<&ClientError>| {
        e.is_some_and(ClientError::is_unauthorized)
    };
    if unauthorized(details.as_ref().err()) || unauthorized(rides.as_ref().err())
    {
        return ViewState::Unauthorized;
    }

    let booking = match details {
        Ok(booking) => booking,
        Err(e) if e.is_not_found() => return ViewState::NotFound,
        Err(e) => {
            warn!("Failed to load booking details: {e}");
            return ViewState::Failed(describe(&e));
        }
    };

    let rides = match rides {
        Ok(list) => list.into_rides(),
        Err(e @ ClientError::APIError(..)) => {
            warn!("Booking rides unavailable, showing none: {e}");
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to load booking rides: {e}");
            return ViewState::Failed(describe(&e));
        }
    };

    ViewState::Loaded(Rc::new(LoadedBooking { booking, rides }))
}

/// Message shown in the failure panel. Response bodies only go to the log.
fn describe(e: &ClientError) -> String {
    match e {
        ClientError::APIError(status, _) => {
            format!("Server responded with {status}")
        }
        other => other.to_string(),
    }
}
