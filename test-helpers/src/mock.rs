//! Sample bookings for UI development.
//!
//! Booking ids 1..=5 form a browsable sequence that covers each page state:
//! - 1: fully populated booking with an assigned and an unassigned ride
//! - 2: minimal booking, no dropoff, no rides
//! - 3: rides with statuses outside the known set
//! - 4: missing (404), to see the not-found page between neighbours
//! - 5: cancelled and completed rides, one ride whose detail is gone

use crate::{Fixtures, MockRoute, booking_details_a, rides_a};
use serde_json::json;

pub struct DevDataset {
    pub booking_ids: Vec<u64>,
    pub missing_booking_id: u64,
}

impl DevDataset {
    pub fn create(fixtures: &Fixtures) -> Self {
        tracing::info!("📦 Creating sample bookings");

        fixtures.insert_booking_with_rides(1, booking_details_a(1001), rides_a());

        fixtures.insert_booking(
            2,
            json!({
                "booking_number": 1002,
                "pickup_location": "Sants Station",
                "datetime_pickup": "2025-06-02T18:00:00",
            }),
        );

        fixtures.insert_booking_with_rides(
            3,
            json!({"booking_number": 1003, "pickup_location": null}),
            vec![
                json!({"id": 30, "status": "On Hold", "return_ride": false}),
                json!({"id": 31, "status": null, "return_ride": false}),
            ],
        );

        fixtures.insert_booking_with_rides(
            5,
            booking_details_a(1005),
            vec![
                json!({
                    "id": 50,
                    "status": "Completed",
                    "return_ride": false,
                    "id_driver": {"id": 7, "first_name": "Jordi"},
                }),
                json!({"id": 51, "status": "canceled", "return_ride": true}),
            ],
        );
        fixtures.respond_with(MockRoute::Ride(5, 51), 404);

        Self {
            booking_ids: vec![1, 2, 3, 5],
            missing_booking_id: 4,
        }
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for booking_id in &self.booking_ids {
            tracing::info!("   📄 /en/booking_details/{booking_id}");
        }
        tracing::info!(
            "   ❓ /en/booking_details/{} (not found)",
            self.missing_booking_id
        );
    }
}
