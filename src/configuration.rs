#[derive(Clone)]
pub struct Configuration {
    pub api_listen: std::net::SocketAddr,
    pub data_dir: String,
    pub seed_races: usize,
    pub log_file: Option<String>,
    pub reset: bool,
}
