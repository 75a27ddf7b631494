pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{
    BookingRecord, DriverRef, PickupDateTime, RideDetail, RideList,
    RideStatus, RideSummary,
};

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Identifier of a booking, as it appears in the details route.
///
/// Ids accepted from a route are positive and fit in the backend's signed
/// 64-bit key space. The arithmetic neighbours produced by [`Self::next`] are
/// not re-checked against that bound; they are link targets only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct BookingId(NonZeroU64);

impl BookingId {
    /// Largest id accepted from a route parameter.
    pub const MAX: u64 = i64::MAX as u64;

    pub fn new(value: u64) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        NonZeroU64::new(value).map(Self)
    }

    /// Validate a raw route parameter.
    ///
    /// Surrounding whitespace and a single leading `+` are tolerated; any
    /// other non-digit, zero, or a value past [`Self::MAX`] is rejected.
    pub fn from_route_param(raw: &str) -> Result<Self, InvalidBookingId> {
        let invalid = || InvalidBookingId(raw.to_string());
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = digits.parse().map_err(|_| invalid())?;
        Self::new(value).ok_or_else(invalid)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The id one below this one, if it is still positive.
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// A route parameter that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid booking id: {0:?}")]
pub struct InvalidBookingId(pub String);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct RideId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct DriverId(pub u64);

/// Role of the signed-in staff member, taken from the session's `role`
/// cookie by the caller and handed to the view explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Dispatcher,
    Driver,
    Other(String),
}

impl Role {
    /// Parse a cookie value. An empty value means no role.
    pub fn from_cookie(value: &str) -> Option<Self> {
        let value = value.trim();
        let role = match value.to_lowercase().as_str() {
            "" => return None,
            "admin" => Self::Admin,
            "dispatcher" => Self::Dispatcher,
            "driver" => Self::Driver,
            _ => Self::Other(value.to_string()),
        };
        Some(role)
    }

    /// Find the `role` cookie in a `name=value; name=value` cookie string.
    pub fn from_cookie_header(cookies: &str) -> Option<Self> {
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == "role").then(|| Self::from_cookie(value)).flatten()
        })
    }

    /// Whether customer contact details may be shown to this role.
    pub fn can_view_contact(&self) -> bool {
        matches!(self, Self::Admin | Self::Dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_param_accepts_positive_integers() {
        assert_eq!(BookingId::from_route_param("42").unwrap().get(), 42);
        assert_eq!(BookingId::from_route_param(" 7 ").unwrap().get(), 7);
        assert_eq!(BookingId::from_route_param("+3").unwrap().get(), 3);
        assert_eq!(
            BookingId::from_route_param("9223372036854775807")
                .unwrap()
                .get(),
            BookingId::MAX
        );
    }

    #[test]
    fn route_param_rejects_everything_else() {
        for raw in [
            "",
            "  ",
            "0",
            "-1",
            "abc",
            "12abc",
            "2.5",
            "1e3",
            "+",
            "++1",
            "9223372036854775808",
            "99999999999999999999999",
        ] {
            let err = BookingId::from_route_param(raw).unwrap_err();
            assert_eq!(err, InvalidBookingId(raw.to_string()));
        }
    }

    #[test]
    fn neighbours() {
        let one = BookingId::new(1).unwrap();
        assert_eq!(one.previous(), None);
        assert_eq!(one.next().get(), 2);

        let ten = BookingId::new(10).unwrap();
        assert_eq!(ten.previous().map(BookingId::get), Some(9));

        let last = BookingId::new(BookingId::MAX).unwrap();
        assert_eq!(last.next().get(), BookingId::MAX + 1);
    }

    #[test]
    fn role_from_cookie() {
        assert_eq!(Role::from_cookie("Admin"), Some(Role::Admin));
        assert_eq!(Role::from_cookie("driver"), Some(Role::Driver));
        assert_eq!(
            Role::from_cookie("auditor"),
            Some(Role::Other("auditor".into()))
        );
        assert_eq!(Role::from_cookie(""), None);

        assert_eq!(
            Role::from_cookie_header("theme=dark; role=dispatcher; lang=es"),
            Some(Role::Dispatcher)
        );
        assert_eq!(Role::from_cookie_header("roles=admin; x=1"), None);
        assert_eq!(Role::from_cookie_header(""), None);

        assert!(Role::Dispatcher.can_view_contact());
        assert!(!Role::Driver.can_view_contact());
        assert!(!Role::Other("auditor".into()).can_view_contact());
    }
}
