//! In-memory stand-in for the bookings API.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, get, web};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One endpoint of the API, for targeting overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockRoute {
    Booking(u64),
    Rides(u64),
    Ride(u64, u64),
}

#[derive(Default)]
struct Data {
    bookings: HashMap<u64, Value>,
    /// Full body of the ride list endpoint, per booking.
    ride_lists: HashMap<u64, Value>,
    rides: HashMap<(u64, u64), Value>,
    statuses: HashMap<MockRoute, StatusCode>,
    delays: HashMap<MockRoute, Duration>,
}

/// Shared handle to the data the mock serves. Changes are visible to the
/// running server immediately.
#[derive(Clone, Default)]
pub struct Fixtures {
    data: Arc<Mutex<Data>>,
}

impl Fixtures {
    pub fn insert_booking(&self, booking_id: u64, record: Value) {
        self.data.lock().unwrap().bookings.insert(booking_id, record);
    }

    /// Serve `rides` as `{"results": [...]}` and each ride individually.
    pub fn insert_rides(&self, booking_id: u64, rides: Vec<Value>) {
        let mut data = self.data.lock().unwrap();
        for ride in &rides {
            if let Some(ride_id) = ride.get("id").and_then(Value::as_u64) {
                data.rides.insert((booking_id, ride_id), ride.clone());
            }
        }
        data.ride_lists
            .insert(booking_id, json!({ "results": rides }));
    }

    /// Store a booking with its rides.
    pub fn insert_booking_with_rides(
        &self,
        booking_id: u64,
        record: Value,
        rides: Vec<Value>,
    ) {
        self.insert_booking(booking_id, record);
        self.insert_rides(booking_id, rides);
    }

    /// Serve an arbitrary body from the ride list endpoint.
    pub fn set_rides_body(&self, booking_id: u64, body: Value) {
        self.data.lock().unwrap().ride_lists.insert(booking_id, body);
    }

    /// Override the body served for one ride's detail endpoint.
    pub fn insert_ride_detail(&self, booking_id: u64, ride_id: u64, body: Value) {
        self.data
            .lock()
            .unwrap()
            .rides
            .insert((booking_id, ride_id), body);
    }

    /// Answer `route` with `status` and an error body.
    pub fn respond_with(&self, route: MockRoute, status: u16) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.data.lock().unwrap().statuses.insert(route, status);
    }

    /// Hold every response on `route` back by `delay`.
    pub fn delay(&self, route: MockRoute, delay: Duration) {
        self.data.lock().unwrap().delays.insert(route, delay);
    }

    async fn respond(
        &self,
        route: MockRoute,
        lookup: impl FnOnce(&Data) -> Option<Value>,
    ) -> HttpResponse {
        let (delay, outcome) = {
            let data = self.data.lock().unwrap();
            let outcome = match data.statuses.get(&route) {
                Some(status) => Err(*status),
                None => lookup(&data).ok_or(StatusCode::NOT_FOUND),
            };
            (data.delays.get(&route).copied(), outcome)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            Ok(body) => HttpResponse::Ok().json(body),
            Err(status) => {
                tracing::debug!(?route, %status, "Mock API error response");
                HttpResponse::build(status).json(json!({
                    "detail": status.canonical_reason().unwrap_or("Error")
                }))
            }
        }
    }
}

#[get("/bookings/{booking_id}")]
async fn get_booking(
    path: web::Path<u64>,
    fixtures: web::Data<Fixtures>,
) -> HttpResponse {
    let booking_id = path.into_inner();
    fixtures
        .respond(MockRoute::Booking(booking_id), |data| {
            data.bookings.get(&booking_id).cloned()
        })
        .await
}

#[get("/bookings/{booking_id}/rides")]
async fn get_rides(
    path: web::Path<u64>,
    fixtures: web::Data<Fixtures>,
) -> HttpResponse {
    let booking_id = path.into_inner();
    fixtures
        .respond(MockRoute::Rides(booking_id), |data| {
            // Bookings without rides still have a (empty) list.
            data.ride_lists.get(&booking_id).cloned().or_else(|| {
                data.bookings
                    .contains_key(&booking_id)
                    .then(|| json!({ "results": [] }))
            })
        })
        .await
}

#[get("/bookings/{booking_id}/rides/{ride_id}")]
async fn get_ride(
    path: web::Path<(u64, u64)>,
    fixtures: web::Data<Fixtures>,
) -> HttpResponse {
    let (booking_id, ride_id) = path.into_inner();
    fixtures
        .respond(MockRoute::Ride(booking_id, ride_id), |data| {
            data.rides.get(&(booking_id, ride_id)).cloned()
        })
        .await
}

/// Build the server, but not await it.
///
/// Returns the server and the port it bound to.
pub fn build(
    fixtures: Fixtures,
    ip: &str,
    port: u16,
) -> std::io::Result<(Server, u16)> {
    let fixtures = web::Data::new(fixtures);

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // The UI dev server runs on another origin and sends cookies.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new().wrap(cors).app_data(fixtures.clone()).service(
            web::scope("/api")
                .service(get_booking)
                .service(get_rides)
                .service(get_ride),
        )
    })
    .listen(listener)?
    .run();
    Ok((server, port))
}
