//! Conversions between directory types and wire messages

use crate::directory::models::Gender;
use crate::directory::wire::WireGender;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use prost_types::Timestamp;
use uuid::Uuid;

/// Convert from domain Gender to wire gender
impl From<Gender> for WireGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => WireGender::Male,
            Gender::Female => WireGender::Female,
            Gender::Unspecified => WireGender::Invalid,
        }
    }
}

/// Convert from wire gender to domain Gender
impl From<WireGender> for Gender {
    fn from(gender: WireGender) -> Self {
        match gender {
            WireGender::Male => Gender::Male,
            WireGender::Female => Gender::Female,
            WireGender::Invalid => Gender::Unspecified,
        }
    }
}

/// Decode a raw wire enum value; unknown values read as unspecified
pub fn gender_from_wire(value: i32) -> Gender {
    WireGender::try_from(value)
        .unwrap_or(WireGender::Invalid)
        .into()
}

pub fn gender_to_wire(gender: Gender) -> i32 {
    WireGender::from(gender) as i32
}

/// Midnight of `date` in `time_zone`, as a wire timestamp
pub fn date_to_timestamp(date: NaiveDate, time_zone: Tz) -> Timestamp {
    let local_midnight = date.and_time(NaiveTime::default());
    let instant = time_zone
        .from_local_datetime(&local_midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local_midnight));

    Timestamp {
        seconds: instant.timestamp(),
        nanos: 0,
    }
}

/// Calendar date of a wire timestamp in `time_zone`
///
/// Returns `None` for timestamps outside the representable range.
pub fn timestamp_to_date(timestamp: &Timestamp, time_zone: Tz) -> Option<NaiveDate> {
    let nanos = u32::try_from(timestamp.nanos).ok()?;
    let instant = DateTime::from_timestamp(timestamp.seconds, nanos)?;
    Some(instant.with_timezone(&time_zone).date_naive())
}

/// Parse an identifier, falling back to the nil UUID when it is malformed
pub fn parse_id_lenient(raw: &str, facet: &'static str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or_else(|err| {
        tracing::warn!(facet, id = raw, error = %err, "Malformed identifier from search service");
        Uuid::nil()
    })
}
