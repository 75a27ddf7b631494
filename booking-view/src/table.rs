use crate::i18n::Messages;
use crate::presentation::StatusBadge;
use payloads::{RideId, RideSummary};

/// The rides section of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideTable {
    /// The "no records" message.
    Empty(String),
    Rows(Vec<RideRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideRow {
    pub id: RideId,
    pub status: StatusBadge,
    /// `"true"` or `"false"`.
    pub return_ride: String,
    pub driver: DriverCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCell {
    Assigned { href: String, name: String },
    Unassigned(String),
}

pub fn ride_table(messages: &Messages, rides: &[RideSummary]) -> RideTable {
    if rides.is_empty() {
        return RideTable::Empty(messages.translate("pick", "noRecords"));
    }
    let rows = rides
        .iter()
        .map(|ride| RideRow {
            id: ride.id,
            status: StatusBadge::new(messages, &ride.status),
            return_ride: ride.return_ride.to_string(),
            driver: match &ride.id_driver {
                Some(driver) => DriverCell::Assigned {
                    href: driver.profile_path(),
                    name: driver.display_name(),
                },
                None => DriverCell::Unassigned(
                    messages.translate("pick", "unassigned"),
                ),
            },
        })
        .collect();
    RideTable::Rows(rows)
}
