pub mod booking_details;
pub mod booking_navigation;
pub mod modal;
pub mod ride_details_modal;
pub mod rides_table;

pub use booking_details::BookingDetails;
pub use booking_navigation::BookingNavigation;
pub use modal::Modal;
pub use ride_details_modal::RideDetailsModal;
pub use rides_table::RidesTable;
