use crate::i18n::Messages;
use payloads::BookingRecord;

/// One labelled line of the trip details section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRow {
    pub label: String,
    pub value: String,
}

/// Trip details of a booking. The pickup location is always listed; the
/// destination, pickup time and comments only when the booking has them.
pub fn trip_details(messages: &Messages, booking: &BookingRecord) -> Vec<TripRow> {
    let row = |key: &str, value: String| TripRow {
        label: messages.translate("pick", key),
        value,
    };

    let pickup_location = booking
        .pickup_location()
        .unwrap_or_else(|| messages.translate("pick", "notProvided"));

    let mut rows = vec![row("pickupLocation", pickup_location)];
    if let Some(destination) = booking.dropoff_location() {
        rows.push(row("destination", destination));
    }
    if let Some(pickup) = booking.pickup_datetime() {
        let value = format!("{} {}", pickup.date, pickup.time);
        rows.push(row("pickupTime", value.trim_end().to_string()));
    }
    if let Some(note) = booking.customer_note() {
        rows.push(row("comments", note));
    }
    rows
}
