use crate::details_for;
use booking_view::navigation::{adjacent, booking_path};
use booking_view::table::{DriverCell, RideTable, ride_table};
use booking_view::{Messages, ViewState};
use payloads::{BookingId, RideId};
use serde_json::json;
use std::time::Duration;
use test_helpers::{MockRoute, spawn_app};

#[tokio::test]
async fn browse_booking_and_inspect_ride() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking_with_rides(
        1,
        test_helpers::booking_details_a(1001),
        test_helpers::rides_a(),
    );
    let (details, redirects) = details_for(&app.client);

    assert!(details.loader.load("1").await);
    let ViewState::Loaded(loaded) = details.view.state() else {
        panic!("expected Loaded, got {:?}", details.view.state());
    };
    let pickup = loaded.booking.pickup_datetime().unwrap();
    assert_eq!((pickup.date.as_str(), pickup.time.as_str()), ("2025-06-01", "09:30:00"));

    let RideTable::Rows(rows) = ride_table(&Messages::for_lang("en"), &loaded.rides) else {
        panic!("expected ride rows");
    };
    assert_eq!(rows[0].status.label, "Confirmed");
    assert_eq!(
        rows[0].driver,
        DriverCell::Assigned { href: "/drivers/12".into(), name: "Marta Gil".into() }
    );
    assert_eq!(rows[1].driver, DriverCell::Unassigned("Unassigned".into()));

    assert!(details.inspector.inspect(RideId(1)).await);
    assert_eq!(details.view.displayed_ride().map(|r| r.id), Some(RideId(1)));
    assert_eq!(details.view.state(), ViewState::Loaded(loaded));

    details.inspector.dismiss();
    assert_eq!(details.view.displayed_ride(), None);
    assert_eq!(redirects.get(), 0);
    Ok(())
}

#[tokio::test]
async fn walking_past_the_last_booking_shows_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(1, json!({"booking_number": 1}));
    let (details, _) = details_for(&app.client);

    details.loader.load("1").await;
    let links = adjacent(BookingId::new(1).unwrap());
    assert_eq!(links.previous, None);
    assert_eq!(booking_path("en", links.next), "/en/booking_details/2");

    details.loader.load_id(links.next).await;
    assert_eq!(details.view.state(), ViewState::NotFound);
    Ok(())
}

#[tokio::test]
async fn empty_ride_list_is_not_an_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(6, json!({"booking_number": 6}));
    app.fixtures.set_rides_body(6, json!({"count": 0}));
    let (details, _) = details_for(&app.client);

    details.loader.load("6").await;
    let ViewState::Loaded(loaded) = details.view.state() else {
        panic!("expected Loaded");
    };
    assert_eq!(
        ride_table(&Messages::for_lang("en"), &loaded.rides),
        RideTable::Empty("No records found".into())
    );
    Ok(())
}

#[tokio::test]
async fn unauthorized_from_either_request_redirects_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(1, json!({}));
    app.fixtures.insert_booking(2, json!({}));
    app.fixtures.respond_with(MockRoute::Booking(1), 401);
    app.fixtures.respond_with(MockRoute::Rides(2), 401);

    for raw in ["1", "2"] {
        let (details, redirects) = details_for(&app.client);
        details.loader.load(raw).await;
        assert_eq!(details.view.state(), ViewState::Unauthorized);
        assert_eq!(redirects.get(), 1, "booking {raw}");
    }
    Ok(())
}

#[tokio::test]
async fn slow_unauthorized_rides_beat_fast_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.respond_with(MockRoute::Rides(3), 401);
    app.fixtures.delay(MockRoute::Rides(3), Duration::from_millis(200));
    let (details, redirects) = details_for(&app.client);

    details.loader.load("3").await;
    assert_eq!(details.view.state(), ViewState::Unauthorized);
    assert_eq!(redirects.get(), 1);
    Ok(())
}

#[tokio::test]
async fn server_error_shows_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(1, json!({}));
    app.fixtures.respond_with(MockRoute::Booking(1), 500);
    let (details, redirects) = details_for(&app.client);

    details.loader.load("1").await;
    assert!(matches!(details.view.state(), ViewState::Failed(_)));
    assert_eq!(redirects.get(), 0);
    Ok(())
}

#[tokio::test]
async fn slow_response_for_previous_booking_is_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(1, json!({"booking_number": 1}));
    app.fixtures.insert_booking(2, json!({"booking_number": 2}));
    app.fixtures.delay(MockRoute::Booking(1), Duration::from_millis(300));
    let (details, _) = details_for(&app.client);

    let (first, second) = futures::join!(details.loader.load("1"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        details.loader.load("2").await
    });

    assert!(!first);
    assert!(second);
    let ViewState::Loaded(loaded) = details.view.state() else {
        panic!("expected Loaded");
    };
    assert_eq!(loaded.booking.booking_number().as_deref(), Some("2"));
    Ok(())
}

#[tokio::test]
async fn missing_ride_replaces_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking_with_rides(
        1,
        json!({"booking_number": 1}),
        vec![json!({"id": 7, "status": "pending"})],
    );
    app.fixtures.respond_with(MockRoute::Ride(1, 7), 404);
    let (details, _) = details_for(&app.client);

    details.loader.load("1").await;
    details.inspector.inspect(RideId(7)).await;
    assert_eq!(details.view.state(), ViewState::NotFound);
    assert_eq!(details.view.displayed_ride(), None);
    Ok(())
}

#[tokio::test]
async fn invalid_booking_param() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (details, redirects) = details_for(&app.client);

    details.loader.load("abc").await;
    assert_eq!(details.view.state(), ViewState::Invalid);
    assert_eq!(redirects.get(), 0);
    Ok(())
}

#[tokio::test]
async fn ride_detail_carries_more_than_its_summary() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking_with_rides(
        1,
        json!({"booking_number": 1}),
        vec![json!({"id": 7, "status": "pending", "return_ride": false})],
    );
    app.fixtures.insert_ride_detail(
        1,
        7,
        json!({
            "id": 7,
            "status": "Confirmed",
            "return_ride": false,
            "flight_number": "VY1234",
            "passengers": 3,
            "email": "guest@example.com",
        }),
    );
    let (details, _) = details_for(&app.client);

    details.loader.load("1").await;
    assert!(details.inspector.inspect(RideId(7)).await);

    let ride = details.view.displayed_ride().expect("ride is displayed");
    assert_eq!(ride.status, payloads::RideStatus::Confirmed);
    assert_eq!(
        ride.trip_fields(),
        [
            ("flight_number".to_string(), "VY1234".to_string()),
            ("passengers".to_string(), "3".to_string()),
        ]
    );
    assert_eq!(
        ride.contact_fields(),
        [("email", "guest@example.com".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn ride_list_error_still_shows_booking() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fixtures.insert_booking(1, json!({"booking_number": 1}));
    app.fixtures.respond_with(MockRoute::Rides(1), 403);
    let (details, redirects) = details_for(&app.client);

    details.loader.load("1").await;
    let ViewState::Loaded(loaded) = details.view.state() else {
        panic!("expected Loaded, got {:?}", details.view.state());
    };
    assert_eq!(loaded.booking.booking_number().as_deref(), Some("1"));
    assert!(loaded.rides.is_empty());
    assert_eq!(redirects.get(), 0);
    Ok(())
}
