mod cli;
mod config;
mod datastore;
mod log;
mod model;
mod result_code;

use clap::Parser;
use dotenv::dotenv;
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

use config::AppPaths;

fn main() {
    dotenv().ok();
    let cli = cli::Cli::parse();

    // the log section is optional and the config may not exist before `todo init`
    let log_config = AppPaths::resolve(cli.config_dir.as_deref())
        .and_then(|paths| paths.load())
        .ok()
        .and_then(|config| config.log);
    let env_filter = EnvFilter::try_from_env(log::LOG_ENV);
    log::setup(env_filter, log_config.as_ref());

    event!(Level::INFO, "Starting todo: {}", env!("FULL_VERSION"));

    let stdout = std::io::stdout();
    if let Err(err) = cli::run(cli, &mut stdout.lock()) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod e2e_tests;
