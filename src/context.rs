use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let config = Configuration {
            api_listen: cli.api_listen,
            data_dir: cli.data_dir.clone(),
            seed_races: cli.seed_races,
            log_file: cli.log_file.clone(),
            reset: cli.reset,
        };
        Self { config }
    }
}
