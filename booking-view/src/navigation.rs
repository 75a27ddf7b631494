//! Previous/next links between bookings.
//!
//! Neighbours are derived by arithmetic only. Whether they exist is left to
//! the destination page, which shows its own not-found view; this is why
//! "next" is always offered.

use payloads::BookingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    /// Absent for the first booking.
    pub previous: Option<BookingId>,
    pub next: BookingId,
}

pub fn adjacent(booking_id: BookingId) -> Adjacent {
    Adjacent {
        previous: booking_id.previous(),
        next: booking_id.next(),
    }
}

/// Path of the details page for `booking_id` in language `lang`.
pub fn booking_path(lang: &str, booking_id: BookingId) -> String {
    format!("/{lang}/booking_details/{booking_id}")
}
