// Keep repository traits and implementations organized here.
pub mod queries;
pub mod repository;
pub mod seed;
pub mod sqlite;

// Re-export the public interface for downstream consumers.
pub use repository::{EventsRepo, RacesRepo};
pub use sqlite::SqliteCatalog;
