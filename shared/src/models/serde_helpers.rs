//! Common serde helpers for legacy storage blobs
//!
//! The original storage kept times of day as `"HH:MM"` strings, with the
//! empty string meaning "not set". These helpers keep that wire shape while
//! the in-memory representation is `Option<NaiveTime>`.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

/// `Option<NaiveTime>` <-> `"HH:MM"` (empty string / null = None)
pub mod hhmm_option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid time: {s}"))),
        }
    }
}

/// Deserialize bool that treats null as false
pub fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}
