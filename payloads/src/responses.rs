use crate::{DriverId, RideId};
use jiff::civil::DateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Details of one booking.
///
/// The backend does not guarantee a shape beyond "a JSON object", so the
/// record is kept as-is and read through accessors. Accessors return `None`
/// for absent, null, `false` or blank values, which the page uses to hide
/// the matching section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingRecord(pub Map<String, Value>);

impl BookingRecord {
    /// Any field rendered as display text.
    pub fn field(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(display_text)
    }

    pub fn booking_number(&self) -> Option<String> {
        self.field("booking_number")
    }

    /// Booking number in the external (partner) system.
    pub fn booking_number_ex(&self) -> Option<String> {
        self.field("booking_number_ex")
    }

    pub fn pickup_location(&self) -> Option<String> {
        self.field("pickup_location")
    }

    pub fn dropoff_location(&self) -> Option<String> {
        self.field("dropoff_location")
    }

    pub fn pickup_datetime(&self) -> Option<PickupDateTime> {
        self.field("datetime_pickup")
            .map(|raw| PickupDateTime::parse(&raw))
    }

    pub fn customer_note(&self) -> Option<String> {
        self.field("customer_note")
    }

    pub fn email(&self) -> Option<String> {
        self.field("email")
    }

    pub fn phone_number(&self) -> Option<String> {
        self.field("phone_number")
    }
}

/// Pickup time split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupDateTime {
    pub date: String,
    pub time: String,
}

impl PickupDateTime {
    /// Civil datetimes are normalized to `YYYY-MM-DD` and `HH:MM:SS`, keeping
    /// the wall clock as sent; a UTC `Z` suffix or an offset is dropped.
    /// Anything else is split at the first `T`, verbatim.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let civil = trimmed
            .strip_suffix(['Z', 'z'])
            .unwrap_or(trimmed)
            .parse::<DateTime>();
        if let Ok(dt) = civil {
            return Self {
                date: dt.strftime("%Y-%m-%d").to_string(),
                time: dt.strftime("%H:%M:%S").to_string(),
            };
        }
        match raw.split_once('T') {
            Some((date, time)) => Self {
                date: date.to_string(),
                time: time.to_string(),
            },
            None => Self {
                date: raw.to_string(),
                time: String::new(),
            },
        }
    }
}

/// Status of a ride, case-folded once at the wire boundary.
///
/// Unrecognized strings are kept verbatim so the label can still show them.
/// A null or missing status is `Unknown("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RideStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Unknown(String),
}

impl RideStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Case-folded key used for translation lookups.
    pub fn key(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::Confirmed => "confirmed".into(),
            Self::Completed => "completed".into(),
            Self::Cancelled => "cancelled".into(),
            Self::Unknown(raw) => raw.trim().to_lowercase(),
        }
    }

    /// Text shown when no translation exists.
    ///
    /// Unknown statuses come back exactly as sent. Known ones were
    /// normalized by [`Self::parse`], so they read as the capitalized key
    /// (`"COMPLETED"` becomes `"Completed"`).
    pub fn raw(&self) -> String {
        match self {
            Self::Unknown(raw) => raw.clone(),
            known => {
                let key = known.key();
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => key,
                }
            }
        }
    }
}

impl Default for RideStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl<'de> Deserialize<'de> for RideStatus {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.map(|raw| Self::parse(&raw)).unwrap_or_default())
    }
}

impl Serialize for RideStatus {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown(raw) => s.serialize_str(raw),
            known => s.serialize_str(&known.key()),
        }
    }
}

/// Driver assigned to a ride, as embedded by the rides endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: DriverId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl DriverRef {
    /// First and last name joined, or the driver id when both are missing.
    pub fn display_name(&self) -> String {
        let name = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            format!("#{}", self.id)
        } else {
            name
        }
    }

    pub fn profile_path(&self) -> String {
        format!("/drivers/{}", self.id)
    }
}

/// One row of a booking's ride list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSummary {
    pub id: RideId,
    #[serde(default)]
    pub status: RideStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub return_ride: bool,
    /// `None` means the ride is unassigned.
    #[serde(default)]
    pub id_driver: Option<DriverRef>,
}

/// Body of the ride list endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RideList {
    #[serde(default)]
    pub results: Option<Vec<RideSummary>>,
}

impl RideList {
    /// The rides, or none when `results` is missing or null.
    pub fn into_rides(self) -> Vec<RideSummary> {
        self.results.unwrap_or_default()
    }
}

/// Full record of one ride, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideDetail {
    pub id: RideId,
    #[serde(default)]
    pub status: RideStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub return_ride: bool,
    #[serde(default)]
    pub id_driver: Option<DriverRef>,
    /// Remaining fields in the order the backend sent them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RideDetail {
    pub fn field(&self, key: &str) -> Option<String> {
        self.extra.get(key).and_then(display_text)
    }

    /// Customer contact fields carried by the ride, if any.
    pub fn contact_fields(&self) -> Vec<(&'static str, String)> {
        ["email", "phone_number"]
            .into_iter()
            .filter_map(|key| self.field(key).map(|value| (key, value)))
            .collect()
    }

    /// Every other displayable field, contact fields excluded.
    pub fn trip_fields(&self) -> Vec<(String, String)> {
        self.extra
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "email" | "phone_number"))
            .filter_map(|(key, value)| {
                display_text(value).map(|text| (key.clone(), text))
            })
            .collect()
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
