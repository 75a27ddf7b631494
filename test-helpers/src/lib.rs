pub mod mock;
pub mod server;
pub mod telemetry;

pub use server::{Fixtures, MockRoute};

use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub fixtures: Fixtures,
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let fixtures = Fixtures::default();
    let (server, port) =
        server::build(fixtures.clone(), "127.0.0.1", port).unwrap();
    tokio::spawn(server);

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{port}"),
            inner_client: client,
        },
        fixtures,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn booking_details_a(booking_number: u64) -> Value {
    json!({
        "booking_number": booking_number,
        "booking_number_ex": format!("EXT-{booking_number}"),
        "pickup_location": "Terminal 2, Barcelona Airport",
        "dropoff_location": "Hotel Arts, Barcelona",
        "datetime_pickup": "2025-06-01T09:30:00",
        "customer_note": "Two large suitcases",
        "email": "guest@example.com",
        "phone_number": "+34 600 000 000",
    })
}

/// An outbound ride with a driver and an unassigned return ride.
pub fn rides_a() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "status": "Confirmed",
            "return_ride": false,
            "id_driver": {"id": 12, "first_name": "Marta", "last_name": "Gil"},
            "pickup_location": "Terminal 2, Barcelona Airport",
            "email": "guest@example.com",
        }),
        json!({
            "id": 2,
            "status": "pending",
            "return_ride": true,
            "id_driver": null,
        }),
    ]
}
