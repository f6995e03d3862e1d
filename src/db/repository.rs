// Shared repository contracts for the two catalogs.
use crate::types::{CatalogError, Event, EventFilter, Race, RaceFilter};

pub trait RacesRepo {
    /// Return races matching the filter, optionally ordered by a column.
    fn list(&self, filter: Option<&RaceFilter>, order_by: &str) -> Result<Vec<Race>, CatalogError>;

    /// Return a single race; `Ok(None)` is the not-found outcome.
    fn get_by_id(&self, id: i64) -> Result<Option<Race>, CatalogError>;
}

pub trait EventsRepo {
    /// Return events matching the filter, optionally ordered by a column.
    fn list(&self, filter: Option<&EventFilter>, order_by: &str)
        -> Result<Vec<Event>, CatalogError>;

    /// Return a single event; `Ok(None)` is the not-found outcome.
    fn get_by_id(&self, id: i64) -> Result<Option<Event>, CatalogError>;
}
