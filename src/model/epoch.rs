//! Epoch-seconds timestamps
//!
//! AWS JSON protocols send timestamps as (possibly fractional) seconds
//! since the Unix epoch. Use with `#[serde(with = "epoch::option")]`.

use chrono::{DateTime, Utc};

fn from_secs(secs: f64) -> Option<DateTime<Utc>> {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// `Option<DateTime<Utc>>` as epoch seconds
pub mod option {
    use super::from_secs;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_i64(ts.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(secs) => from_secs(secs)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}"))),
            None => Ok(None),
        }
    }
}
