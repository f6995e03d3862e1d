use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    db::{EventsRepo, RacesRepo},
    types::Event,
};

use super::{
    models::{
        ErrorResponse, GetEventResponse, GetRaceResponse, HealthResponse, ListEventsRequest,
        ListEventsResponse, ListRacesRequest, ListRacesResponse,
    },
    AppState,
};

pub async fn health<R, E>(State(state): State<AppState<R, E>>) -> impl IntoResponse
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            uptime_secs,
        }),
    )
}

pub async fn list_races<R, E>(
    State(state): State<AppState<R, E>>,
    Json(req): Json<ListRacesRequest>,
) -> impl IntoResponse
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    match state.races.list(req.filter.as_ref(), &req.order_by) {
        Ok(races) => Json(ListRacesResponse { races }).into_response(),
        Err(err) => {
            log::error!("Failed to list races: {:?}", err);
            internal_error()
        }
    }
}

pub async fn get_race<R, E>(
    State(state): State<AppState<R, E>>,
    Path(id): Path<i64>,
) -> impl IntoResponse
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    match state.races.get_by_id(id) {
        Ok(Some(race)) => Json(GetRaceResponse { race }).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: "Race not found".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            log::error!("Failed to get race {}: {:?}", id, err);
            internal_error()
        }
    }
}

pub async fn list_events<R, E>(
    State(state): State<AppState<R, E>>,
    Json(req): Json<ListEventsRequest>,
) -> impl IntoResponse
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    match state.events.list(req.filter.as_ref(), &req.order_by) {
        Ok(events) => Json(ListEventsResponse { events }).into_response(),
        Err(err) => {
            log::error!("Failed to list events: {:?}", err);
            internal_error()
        }
    }
}

/// Unlike [`get_race`], a missing event comes back as a zero-value event
/// in a 200 envelope rather than a 404. The asymmetry is deliberate and
/// documented; unifying it would change the observable contract.
pub async fn get_event<R, E>(
    State(state): State<AppState<R, E>>,
    Path(id): Path<i64>,
) -> impl IntoResponse
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    match state.events.get_by_id(id) {
        Ok(Some(event)) => Json(GetEventResponse { event }).into_response(),
        Ok(None) => Json(GetEventResponse {
            event: Event::default(),
        })
        .into_response(),
        Err(err) => {
            log::error!("Failed to get event {}: {:?}", id, err);
            internal_error()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "resource not found".to_string(),
        }),
    )
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: "internal error".to_string(),
        }),
    )
        .into_response()
}
