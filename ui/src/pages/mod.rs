pub mod booking_details;
pub mod not_found;
pub mod unauthorized;

pub use booking_details::BookingDetailsPage;
pub use not_found::NotFoundPage;
pub use unauthorized::UnauthorizedPage;
