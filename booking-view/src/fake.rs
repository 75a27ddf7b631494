//! In-process booking source for unit tests.

use crate::BookingSource;
use futures::channel::oneshot;
use payloads::{
    BookingId, BookingRecord, ClientError, RideDetail, RideId, RideList,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Booking(u64),
    Rides(u64),
    Ride(u64, u64),
}

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Malformed,
}

/// Replies are scripted per endpoint; unscripted endpoints answer 404.
/// A gated endpoint does not answer until its gate is released.
#[derive(Default)]
pub struct FakeSource {
    replies: RefCell<HashMap<Endpoint, Reply>>,
    gates: RefCell<HashMap<Endpoint, oneshot::Receiver<()>>>,
    calls: Cell<usize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: Endpoint, reply: Reply) -> Self {
        self.replies.borrow_mut().insert(endpoint, reply);
        self
    }

    /// Hold back the reply for `endpoint` until the returned sender fires.
    pub fn gate(&self, endpoint: Endpoint) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(endpoint, rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    async fn answer<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<T, ClientError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gates.borrow_mut().remove(&endpoint);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let reply = self
            .replies
            .borrow()
            .get(&endpoint)
            .cloned()
            .unwrap_or(Reply::Status(404));
        match reply {
            Reply::Json(value) => Ok(serde_json::from_value(value)?),
            Reply::Status(code) => Err(ClientError::APIError(
                StatusCode::from_u16(code).unwrap(),
                String::new(),
            )),
            Reply::Malformed => {
                Err(serde_json::from_str::<Value>("{not json").unwrap_err().into())
            }
        }
    }
}

impl BookingSource for FakeSource {
    async fn booking(
        &self,
        booking_id: BookingId,
    ) -> Result<BookingRecord, ClientError> {
        self.answer(Endpoint::Booking(booking_id.get())).await
    }

    async fn rides(
        &self,
        booking_id: BookingId,
    ) -> Result<RideList, ClientError> {
        self.answer(Endpoint::Rides(booking_id.get())).await
    }

    async fn ride(
        &self,
        booking_id: BookingId,
        ride_id: RideId,
    ) -> Result<RideDetail, ClientError> {
        self.answer(Endpoint::Ride(booking_id.get(), ride_id.0)).await
    }
}
