// SQLite-backed implementation of both catalog repositories.
use std::path::Path;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension};

use crate::types::{CatalogError, Event, EventFilter, Race, RaceFilter, Timestamp};

use super::{queries, seed, EventsRepo, RacesRepo};

/// Catalog store over a single SQLite database file.
///
/// Connections are opened per call; SQLite's own locking plus the WAL
/// journal make the handle safe to share across in-flight requests.
#[derive(Clone)]
pub struct SqliteCatalog {
    pub path: String,
    seeded: Arc<OnceLock<Result<(), String>>>,
}

impl SqliteCatalog {
    /// Build a catalog that targets the provided SQLite database path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
            seeded: Arc::new(OnceLock::new()),
        }
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset_all(&self) -> std::io::Result<()> {
        if !Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)
    }

    /// Seed demonstration data, at most once per catalog instance.
    ///
    /// The first caller performs the seed; concurrent and later callers
    /// observe the same outcome.
    pub fn init(&self, race_count: usize) -> Result<(), CatalogError> {
        let outcome = self.seeded.get_or_init(|| {
            self.with_conn(|conn| {
                seed::seed_races(conn, race_count)?;
                seed::seed_events(conn)
            })
            .map_err(|e| e.to_string())
        });
        outcome.clone().map_err(CatalogError::Seed)
    }

    /// Open a connection, ensure schema, and run the supplied closure.
    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;
        Self::migrate(&conn)?;
        f(&conn)
    }

    /// Create missing tables and indexes.
    fn migrate(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS races (
                id INTEGER PRIMARY KEY,
                meeting_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                number INTEGER NOT NULL,
                visible INTEGER NOT NULL,
                advertised_start_time DATETIME NOT NULL
            );

            CREATE TABLE IF NOT EXISTS events (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                location TEXT NOT NULL,
                sport TEXT NOT NULL,
                advertised_start_time DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_races_meeting ON races(meeting_id);
            CREATE INDEX IF NOT EXISTS idx_events_sport ON events(sport);
            "#,
        )
    }
}

/// Append equality predicates for every set race filter field, collecting
/// positional parameters in predicate order.
fn apply_race_filter(query: &str, filter: Option<&RaceFilter>) -> (String, Vec<Value>) {
    let mut clauses: Vec<&str> = Vec::new();
    let mut args: Vec<Value> = Vec::new();

    if let Some(filter) = filter {
        if let Some(visible) = filter.visible {
            clauses.push("visible = ?");
            args.push(Value::from(visible));
        }
    }

    if clauses.is_empty() {
        return (query.to_string(), args);
    }
    (format!("{} WHERE {}", query, clauses.join(" AND ")), args)
}

/// Same as [`apply_race_filter`], checking name, then location, then sport.
fn apply_event_filter(query: &str, filter: Option<&EventFilter>) -> (String, Vec<Value>) {
    let mut clauses: Vec<&str> = Vec::new();
    let mut args: Vec<Value> = Vec::new();

    if let Some(filter) = filter {
        if !filter.name.is_empty() {
            clauses.push("name = ?");
            args.push(Value::from(filter.name.clone()));
        }
        if !filter.location.is_empty() {
            clauses.push("location = ?");
            args.push(Value::from(filter.location.clone()));
        }
        if !filter.sport.is_empty() {
            clauses.push("sport = ?");
            args.push(Value::from(filter.sport.clone()));
        }
    }

    if clauses.is_empty() {
        return (query.to_string(), args);
    }
    (format!("{} WHERE {}", query, clauses.join(" AND ")), args)
}

/// Apply ORDER BY as the last step of query assembly.
///
/// The column comes from a trusted caller and is appended unescaped and
/// unvalidated; an unknown column surfaces as a store error.
fn apply_sort(query: String, order_by: &str) -> String {
    if order_by.is_empty() {
        return query;
    }
    format!("{query} ORDER BY {order_by}")
}

fn map_race_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Race> {
    let advertised_start: DateTime<Utc> = row.get(5)?;
    Ok(Race {
        id: row.get(0)?,
        meeting_id: row.get(1)?,
        name: row.get(2)?,
        number: row.get(3)?,
        visible: row.get(4)?,
        advertised_start_time: Timestamp::from(advertised_start),
        status: row.get(6)?,
    })
}

fn map_event_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Event> {
    let advertised_start: DateTime<Utc> = row.get(4)?;
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        sport: row.get(3)?,
        advertised_start_time: Timestamp::from(advertised_start),
        status: row.get(5)?,
    })
}

impl RacesRepo for SqliteCatalog {
    fn list(&self, filter: Option<&RaceFilter>, order_by: &str) -> Result<Vec<Race>, CatalogError> {
        let races = self.with_conn(|conn| {
            let (query, args) = apply_race_filter(queries::RACES_LIST, filter);
            let query = apply_sort(query, order_by);
            let mut stmt = conn.prepare(&query)?;
            let rows = stmt
                .query_map(params_from_iter(args), map_race_row)?
                .collect::<rusqlite::Result<Vec<_>>>();
            rows
        })?;
        Ok(races)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Race>, CatalogError> {
        let race = self.with_conn(|conn| {
            conn.query_row(queries::RACE_BY_ID, params![id], map_race_row)
                .optional()
        })?;
        Ok(race)
    }
}

impl EventsRepo for SqliteCatalog {
    fn list(
        &self,
        filter: Option<&EventFilter>,
        order_by: &str,
    ) -> Result<Vec<Event>, CatalogError> {
        let events = self.with_conn(|conn| {
            let (query, args) = apply_event_filter(queries::EVENTS_LIST, filter);
            let query = apply_sort(query, order_by);
            let mut stmt = conn.prepare(&query)?;
            let rows = stmt
                .query_map(params_from_iter(args), map_event_row)?
                .collect::<rusqlite::Result<Vec<_>>>();
            rows
        })?;
        Ok(events)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Event>, CatalogError> {
        let event = self.with_conn(|conn| {
            conn.query_row(queries::EVENT_BY_ID, params![id], map_event_row)
                .optional()
        })?;
        Ok(event)
    }
}
