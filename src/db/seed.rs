// Demonstration data for local runs and tests.
use chrono::{Duration, Utc};
use rand::Rng;
use rusqlite::{params, Connection};

const RACE_NAMES: &[&str] = &[
    "Flemington Flyer",
    "Sandown Sprint",
    "Caulfield Classic",
    "Eagle Farm Stakes",
    "Randwick Rush",
    "Moonee Valley Mile",
    "Doomben Dash",
    "Morphettville Plate",
    "Ascot Gold Cup",
    "Rosehill Handicap",
];

const EVENT_LOCATIONS: &[&str] = &["Brisbane", "Sydney", "Melbourne", "Perth", "Adelaide"];

const EVENT_SPORTS: &[&str] = &[
    "Bear Fighting",
    "Basketball",
    "Soccer",
    "Tennis",
    "Cricket",
    "Darts",
];

const EVENT_COUNT: usize = 50;

/// Insert `count` races with randomized attributes and start times within
/// a day of now. Idempotent: existing ids are left untouched.
pub fn seed_races(conn: &Connection, count: usize) -> rusqlite::Result<()> {
    let mut rng = rand::thread_rng();
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for id in 1..=count as i64 {
            let start = Utc::now() + Duration::seconds(rng.gen_range(-86_400..=86_400));
            stmt.execute(params![
                id,
                rng.gen_range(1..=10i64),
                RACE_NAMES[rng.gen_range(0..RACE_NAMES.len())],
                rng.gen_range(1..=12i64),
                rng.gen_bool(0.5),
                start.to_rfc3339(),
            ])?;
        }
    }
    tx.commit()
}

/// Insert the fixed event roster. Locations and sports cycle through
/// short lists so every combination shows up; event 1 is always
/// "Mock Event 1" in Brisbane for Bear Fighting.
pub fn seed_events(conn: &Connection) -> rusqlite::Result<()> {
    let mut rng = rand::thread_rng();
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO events (id, name, location, sport, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for id in 1..=EVENT_COUNT as i64 {
            let idx = (id - 1) as usize;
            let start = Utc::now() + Duration::seconds(rng.gen_range(-86_400..=86_400));
            stmt.execute(params![
                id,
                format!("Mock Event {id}"),
                EVENT_LOCATIONS[idx % EVENT_LOCATIONS.len()],
                EVENT_SPORTS[idx % EVENT_SPORTS.len()],
                start.to_rfc3339(),
            ])?;
        }
    }
    tx.commit()
}
