use payloads::{BookingId, ClientError, RideId, RideStatus};
use reqwest::StatusCode;
use serde_json::json;
use test_helpers::{MockRoute, assert_status_code, spawn_app};

fn id(n: u64) -> BookingId {
    BookingId::new(n).unwrap()
}

#[tokio::test]
async fn fetch_booking_rides_and_ride() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking_with_rides(
        1,
        test_helpers::booking_details_a(1001),
        test_helpers::rides_a(),
    );

    let booking = app.client.get_booking(id(1)).await?;
    assert_eq!(booking.booking_number().as_deref(), Some("1001"));
    assert_eq!(booking.booking_number_ex().as_deref(), Some("EXT-1001"));

    let rides = app.client.get_rides(id(1)).await?.into_rides();
    assert_eq!(rides.len(), 2);
    assert_eq!(rides[0].status, RideStatus::Confirmed);
    assert!(rides[1].return_ride);

    let ride = app.client.get_ride(id(1), RideId(1)).await?;
    assert_eq!(ride.id, RideId(1));
    assert_eq!(ride.field("pickup_location").as_deref(), Some("Terminal 2, Barcelona Airport"));
    Ok(())
}

#[tokio::test]
async fn error_statuses_are_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(2, json!({"booking_number": 2}));
    app.fixtures.respond_with(MockRoute::Rides(2), 401);

    assert_status_code(app.client.get_booking(id(3)).await, StatusCode::NOT_FOUND);
    assert_status_code(app.client.get_rides(id(2)).await, StatusCode::UNAUTHORIZED);
    let err = app.client.get_ride(id(2), RideId(9)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_unauthorized());
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(4, json!("not an object"));

    let err = app.client.get_booking(id(4)).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.status(), None);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let app = spawn_app().await;
    let client = payloads::APIClient {
        // Nothing listens on port 1.
        address: "http://127.0.0.1:1".into(),
        inner_client: app.client.inner_client.clone(),
    };

    let err = client.get_booking(id(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
