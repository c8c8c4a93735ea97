use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::records::core::date_format;

/// Minutes logged by one employee against one project.
///
/// `employee_id` and `project_id` are not checked against the other collections. Records
/// written before request bodies were typed may lack the text fields or carry `minutes` as
/// a fraction or a numeric string; those still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub task: String,
    #[serde(default, deserialize_with = "stored_minutes")]
    pub minutes: u32,
    #[serde(with = "date_format")]
    pub date: DateTime<FixedOffset>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMinutes {
    Whole(u64),
    Fraction(f64),
    Text(String),
}

// Fractions round to the nearest minute. Negative or non-numeric values are rejected.
fn stored_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let fraction = match Option::<StoredMinutes>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(StoredMinutes::Whole(value)) => {
            return u32::try_from(value).map_err(D::Error::custom);
        }
        Some(StoredMinutes::Fraction(value)) => value,
        Some(StoredMinutes::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("minutes is not a number: {text:?}")))?,
    };

    if !fraction.is_finite() || fraction < 0.0 || fraction.round() > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!("minutes out of range: {fraction}")));
    }
    Ok(fraction.round() as u32)
}
