// --- File: crates/slotbridge_slots/src/models.rs ---
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Timestamp (de)serialization shared by the upstream and inbound wire shapes.
///
/// Values are rendered without an offset and with fractional seconds only when
/// present, so a rendered timestamp parses back to the identical value.
/// Parsing accepts that same naive shape, or RFC 3339 with an offset which is
/// normalized to UTC before the offset is dropped.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn format(value: &NaiveDateTime) -> String {
        value.format(WIRE_FORMAT).to_string()
    }

    pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, WIRE_FORMAT).or_else(|naive_err| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc).naive_utc())
                .map_err(|_| naive_err)
        })
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }

    /// Same as the parent module, for optional fields. `null` and `""` both mean absent.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(&format(v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => parse(&raw)
                    .map(Some)
                    .map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}"))),
                _ => Ok(None),
            }
        }
    }
}

// --- Upstream wire shapes ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Facility {
    pub facility_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Working hours for one day, expressed as whole hours from midnight.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkPeriod {
    pub start_hour: i64,
    pub lunch_start_hour: i64,
    pub lunch_end_hour: i64,
    pub end_hour: i64,
}

impl WorkPeriod {
    /// Hours lie in `[0, 24]` and are ordered start, lunch start, lunch end, end.
    pub fn is_well_formed(&self) -> bool {
        let hours = [
            self.start_hour,
            self.lunch_start_hour,
            self.lunch_end_hour,
            self.end_hour,
        ];
        hours.iter().all(|h| (0..=24).contains(h)) && hours.windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether a slot starting in `hour` lies in the morning or afternoon session.
    /// Only the hour is considered, so a 30 minute slot starting at 11:30 with
    /// lunch at 12 is bookable even though it ends at lunch.
    pub fn is_bookable_hour(&self, hour: i64) -> bool {
        let morning = self.start_hour <= hour && hour < self.lunch_start_hour;
        let afternoon = self.lunch_end_hour <= hour && hour < self.end_hour;
        morning || afternoon
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BusySlot {
    #[serde(with = "timestamp")]
    pub start: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end: NaiveDateTime,
}

impl BusySlot {
    /// True when the candidate lies entirely inside this busy interval.
    /// Partial overlaps do not block.
    pub fn covers(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.start && end <= self.end
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DayAvailability {
    pub work_period: WorkPeriod,
    #[serde(default)]
    pub busy_slots: Option<Vec<BusySlot>>,
}

impl DayAvailability {
    pub fn busy_slots(&self) -> &[BusySlot] {
        self.busy_slots.as_deref().unwrap_or(&[])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyAvailability {
    pub facility: Facility,
    pub slot_duration_minutes: i64,
    #[serde(default)]
    pub monday: Option<DayAvailability>,
    #[serde(default)]
    pub tuesday: Option<DayAvailability>,
    #[serde(default)]
    pub wednesday: Option<DayAvailability>,
    #[serde(default)]
    pub thursday: Option<DayAvailability>,
    #[serde(default)]
    pub friday: Option<DayAvailability>,
    #[serde(default)]
    pub saturday: Option<DayAvailability>,
    #[serde(default)]
    pub sunday: Option<DayAvailability>,
}

impl WeeklyAvailability {
    /// Days in week order, Monday first.
    pub fn days(&self) -> [(Weekday, Option<&DayAvailability>); 7] {
        [
            (Weekday::Mon, self.monday.as_ref()),
            (Weekday::Tue, self.tuesday.as_ref()),
            (Weekday::Wed, self.wednesday.as_ref()),
            (Weekday::Thu, self.thursday.as_ref()),
            (Weekday::Fri, self.friday.as_ref()),
            (Weekday::Sat, self.saturday.as_ref()),
            (Weekday::Sun, self.sunday.as_ref()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST {base}/TakeSlot`. Timestamps are already rendered strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TakeSlotRequest {
    pub facility_id: Uuid,
    pub start: String,
    pub end: String,
    pub comments: String,
    pub patient: Patient,
}

/// Result of a 2xx `TakeSlot` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeSlotOutcome {
    Taken,
    /// The service answered 2xx but refused the booking with this message.
    Declined(String),
}

// --- Inbound / outbound API shapes ---

#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Monday of the requested week, YYYY-MM-DD
    #[serde(rename = "MondayDate")]
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-07-01"))]
    pub monday_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    pub facility_id: Uuid,
    #[serde(with = "timestamp")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-07-01T09:00:00"))]
    pub start: NaiveDateTime,
    #[serde(with = "timestamp")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-07-01T09:30:00"))]
    pub end: NaiveDateTime,
}

/// Booking request as sent by the client. Every field is optional on the wire;
/// absent values are reported by the booking validators rather than by the
/// JSON extractor.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BookSlotRequest {
    pub facility_id: Option<Uuid>,
    #[serde(with = "timestamp::option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "2024-07-01T09:00:00"))]
    pub start: Option<NaiveDateTime>,
    #[serde(with = "timestamp::option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "2024-07-01T09:30:00"))]
    pub end: Option<NaiveDateTime>,
    pub comments: String,
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
}

/// A booking request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub facility_id: Uuid,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub comments: String,
    pub patient: Patient,
}

impl Booking {
    /// Builds a booking from a request, or `None` when a required value is missing.
    /// Callers run the booking rules first, so `None` only follows a validation failure.
    pub fn from_request(request: BookSlotRequest) -> Option<Self> {
        let facility_id = request.facility_id.filter(|id| !id.is_nil())?;
        Some(Booking {
            facility_id,
            start: request.start?,
            end: request.end?,
            comments: request.comments,
            patient: Patient {
                name: request.name,
                second_name: request.second_name,
                email: request.email,
                phone: request.phone,
            },
        })
    }

    pub fn matches(&self, slot: &AvailableSlot) -> bool {
        self.start == slot.start && self.end == slot.end
    }
}

impl From<&Booking> for TakeSlotRequest {
    fn from(booking: &Booking) -> Self {
        TakeSlotRequest {
            facility_id: booking.facility_id,
            start: timestamp::format(&booking.start),
            end: timestamp::format(&booking.end),
            comments: booking.comments.clone(),
            patient: booking.patient.clone(),
        }
    }
}

/// Returned once the upstream service accepted a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub facility_id: Uuid,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BookingConfirmation {
    pub const MESSAGE: &'static str = "Slot booked successfully.";
}
