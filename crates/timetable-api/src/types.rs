// Wire types for the timetable payload.
//
// Every collection tolerates being absent or `null`: a thin payload degrades
// to an empty schedule instead of failing the whole retrieval.

use serde::{Deserialize, Deserializer, Serialize};

/// The JSON document served by the timetable endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableResponse {
    /// Grid columns, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<String>,
    /// Grid rows, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<EntryResponse>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teachers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<String>,
}

/// One scheduled session as it appears on the wire.
///
/// Every field is optional. A missing or `null` `day`/`slot` becomes `""`
/// / `0`; the grid gives such entries a synthesized cell rather than
/// dropping them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slot: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub track: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teacher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
