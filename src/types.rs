use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds and nanoseconds since the UNIX epoch; the wire form of a
/// scheduled start time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }
}

/// A single race within a meeting.
///
/// `status` is derived at query time from `advertised_start_time` versus
/// the store clock; it is never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: String,
}

/// A generic sports event. Same derived `status` semantics as [`Race`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub sport: String,
    pub advertised_start_time: Timestamp,
    pub status: String,
}

/// Optional equality predicates for listing races.
///
/// `visible` is tri-state: absent applies no predicate, `true`/`false`
/// filter to that visibility.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RaceFilter {
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Optional equality predicates for listing events; an empty string
/// means the field is not filtered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sport: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("seed error: {0}")]
    Seed(String),
}
