use serde_derive::{Deserialize, Serialize};
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

pub const LOG_ENV: &str = "TODO_LOG";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Log {
    pub level: String,
    #[serde(default)]
    pub structured: bool,
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config level is not used.
/// Without either of them nothing is logged.
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    log: Option<&Log>,
) {
    let env_filter = match (env_filter, log) {
        (Ok(env_filter), _) => env_filter,
        (Err(_), Some(log)) => EnvFilter::new(&log.level),
        (Err(_), None) => return,
    };
    let structured = log.map_or(false, |log| log.structured);

    let sbuilder = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc3339())
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter);
    let res = if structured {
        tracing::subscriber::set_global_default(sbuilder.json().finish())
    } else {
        tracing::subscriber::set_global_default(sbuilder.with_ansi(true).finish())
    };
    if let Err(err) = res {
        eprintln!("setting tracing default subscriber failed: {}", err);
    }
}
