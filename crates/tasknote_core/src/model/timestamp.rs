//! `createdAt` wire codec.
//!
//! Records are written with RFC 3339 UTC timestamps at millisecond precision
//! (`2024-05-01T09:30:00.000Z`). Reads accept any RFC 3339 string or an
//! integer epoch-millisecond value, and always produce a `DateTime<Utc>`.
//! Values whose UTC year falls outside `0..=9999` are rejected on read, since
//! the stored text form has a four-digit year.
//!
//! Use through `#[serde(with = "crate::model::timestamp")]`.

use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Returns the current instant truncated to millisecond precision.
///
/// Stored timestamps carry milliseconds only, so truncating up front keeps a
/// save/load round-trip exact.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats a timestamp in the stored text form.
pub fn to_wire(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_wire(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text.trim()).map(|value| value.with_timezone(&Utc))
}

/// Years the stored text form can carry.
const WIRE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn within_wire_years(value: &DateTime<Utc>) -> bool {
    WIRE_YEARS.contains(&value.year())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_wire(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireTimestamp {
        Text(String),
        EpochMillis(i64),
    }

    let (value, raw) = match WireTimestamp::deserialize(deserializer)? {
        WireTimestamp::Text(text) => {
            let value = parse_wire(&text)
                .map_err(|err| de::Error::custom(format!("invalid createdAt `{text}`: {err}")))?;
            (Some(value), text)
        }
        WireTimestamp::EpochMillis(millis) => {
            (Utc.timestamp_millis_opt(millis).single(), millis.to_string())
        }
    };
    value
        .filter(within_wire_years)
        .ok_or_else(|| de::Error::custom(format!("createdAt out of range: {raw}")))
}
