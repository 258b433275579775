use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

pub fn filter_directive(env: Option<String>, verbose: bool, config: &CliConfig) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ if verbose => "debug".to_string(),
        _ => config.log_filter.clone(),
    }
}

pub fn env_directive() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV).ok()
}

pub fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
