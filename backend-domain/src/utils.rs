use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::WarHitError;

/// Fixed-width UTC format used by the game API, e.g. `20240105T081503.000Z`.
pub const WAR_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.fZ";

pub fn parse_war_timestamp(value: &str) -> Result<DateTime<Utc>, WarHitError> {
    NaiveDateTime::parse_from_str(value.trim(), WAR_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| WarHitError::InvalidTimestamp(value.to_string()))
}

pub fn millis_to_rfc3339(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|time| time.to_rfc3339())
}
