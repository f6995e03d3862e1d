use serde::{Deserialize, Serialize};

use crate::types::{Event, EventFilter, Race, RaceFilter};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRacesRequest {
    pub filter: Option<RaceFilter>,
    pub order_by: String,
}

#[derive(Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRaceResponse {
    pub race: Race,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEventsRequest {
    pub filter: Option<EventFilter>,
    pub order_by: String,
}

#[derive(Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Serialize, Deserialize)]
pub struct GetEventResponse {
    pub event: Event,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
