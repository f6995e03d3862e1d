// Fixed base queries per catalog. Status is calculated on the fly:
// CLOSED once the advertised start has passed, OPEN before it. Both
// catalogs go through datetime() so the comparison is normalized, not
// a raw text compare.

pub const RACES_LIST: &str = "
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time,
        CASE
            WHEN datetime(advertised_start_time) <= datetime('now') THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM races";

pub const RACE_BY_ID: &str = "
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time,
        CASE
            WHEN datetime(advertised_start_time) <= datetime('now') THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM races
    WHERE id = ?1";

pub const EVENTS_LIST: &str = "
    SELECT
        id,
        name,
        location,
        sport,
        advertised_start_time,
        CASE
            WHEN datetime(advertised_start_time) <= datetime('now') THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM events";

pub const EVENT_BY_ID: &str = "
    SELECT
        id,
        name,
        location,
        sport,
        advertised_start_time,
        CASE
            WHEN datetime(advertised_start_time) <= datetime('now') THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM events
    WHERE id = ?1";
