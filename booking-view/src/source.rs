//! Collaborators the view depends on but does not own.

use payloads::{
    APIClient, BookingId, BookingRecord, ClientError, RideDetail, RideId,
    RideList,
};

/// Where booking data comes from.
///
/// Futures are driven on a single-threaded executor (the browser event loop,
/// or a current-thread runtime in tests), so no `Send` bound is required.
#[allow(async_fn_in_trait)]
pub trait BookingSource {
    async fn booking(
        &self,
        booking_id: BookingId,
    ) -> Result<BookingRecord, ClientError>;

    async fn rides(&self, booking_id: BookingId)
    -> Result<RideList, ClientError>;

    async fn ride(
        &self,
        booking_id: BookingId,
        ride_id: RideId,
    ) -> Result<RideDetail, ClientError>;
}

impl BookingSource for APIClient {
    async fn booking(
        &self,
        booking_id: BookingId,
    ) -> Result<BookingRecord, ClientError> {
        self.get_booking(booking_id).await
    }

    async fn rides(
        &self,
        booking_id: BookingId,
    ) -> Result<RideList, ClientError> {
        self.get_rides(booking_id).await
    }

    async fn ride(
        &self,
        booking_id: BookingId,
        ride_id: RideId,
    ) -> Result<RideDetail, ClientError> {
        self.get_ride(booking_id, ride_id).await
    }
}

/// Navigation performed when the session is no longer authorized.
pub trait Redirect {
    fn unauthorized(&self);
}

impl<F: Fn()> Redirect for F {
    fn unauthorized(&self) {
        self()
    }
}
