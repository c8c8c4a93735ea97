// Serde representation of a time entry `date`.
//
// Written as RFC 3339 with the offset the entry was recorded in. Reading also accepts the
// `Date.prototype.toString()` shape older data files were written with, for example
// `Sun Oct 18 2026 09:30:00 GMT+0200 (Central European Summer Time)`.

use chrono::{DateTime, FixedOffset, ParseResult};
use serde::{Deserialize, Deserializer, Serializer, de};

const LEGACY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

pub fn serialize<S>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

pub fn parse(raw: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).or_else(|_| {
        // drop the trailing " (Zone Name)"
        let head = raw.split(" (").next().unwrap_or(raw);
        DateTime::parse_from_str(head.trim(), LEGACY_FORMAT)
    })
}
