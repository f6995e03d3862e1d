use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::{EventsRepo, RacesRepo};

mod handlers;
mod models;

use handlers::{get_event, get_race, health, list_events, list_races, not_found};

#[derive(Clone)]
pub struct AppState<R, E> {
    pub races: R,
    pub events: E,
    pub started_at: std::time::SystemTime,
}

/// Build the catalog router over the two injected repositories.
pub fn router<R, E>(races: R, events: E) -> Router
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    let state = AppState {
        races,
        events,
        started_at: std::time::SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health::<R, E>))
        .route("/v1/list-races", post(list_races::<R, E>))
        .route("/v1/races/:id", get(get_race::<R, E>))
        .route("/v1/list-events", post(list_events::<R, E>))
        .route("/v1/events/:id", get(get_event::<R, E>))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<R, E>(
    addr: SocketAddr,
    races: R,
    events: E,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()>
where
    R: RacesRepo + Clone + Send + Sync + 'static,
    E: EventsRepo + Clone + Send + Sync + 'static,
{
    log::info!("🌐 Catalog API on http://{}", addr);

    let app = router(races, events);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 API shutdown requested");
        })
        .await?;
    log::info!("👋 API server exited");
    Ok(())
}
