pub mod use_booking_details;
pub mod use_title;

pub use use_booking_details::{BookingDetailsHookReturn, use_booking_details};
pub use use_title::use_title;
