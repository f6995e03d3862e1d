use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve the racing and sports-event catalogs over HTTP",
    long_about = "Read-only catalog service exposing races and sports events from a local SQLite store, with filterable, sortable listings and point lookups."
)]
pub struct Cli {
    #[arg(
        long = "api-listen",
        env = "TRACKSIDE_API_LISTEN",
        default_value = "127.0.0.1:8000",
        value_name = "ADDR",
        help = "Catalog API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long,
        env = "TRACKSIDE_DATA_DIR",
        default_value = ".trackside/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: String,

    #[arg(
        long = "seed-races",
        env = "TRACKSIDE_SEED_RACES",
        default_value_t = 100usize,
        value_name = "N",
        help = "Number of demonstration races seeded on first run"
    )]
    pub seed_races: usize,

    #[arg(
        long,
        default_value_t = false,
        help = "Delete the SQLite database before starting"
    )]
    pub reset: bool,

    #[arg(
        long = "log-file",
        env = "TRACKSIDE_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
