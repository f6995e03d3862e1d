//! Read-only racing and sports-event catalogs served over an RPC-style
//! HTTP interface, backed by SQLite.

pub mod app;
pub mod cli;
pub mod configuration;
pub mod context;
pub mod db;
pub mod rest;
pub mod tracing;
pub mod types;
