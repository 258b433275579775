use std::io::{self, Write};
use std::path::PathBuf;

use accept_languages_core::{Apartment, Platform, PreferenceError, Session};
use accept_languages_windows::system_platform;
use thiserror::Error;
use tracing::debug;

use crate::config::load_selected_config;
use crate::error::CliError;
use crate::logging::{env_directive, filter_directive, init_logging};
use crate::output::{OutputFormat, write_languages};

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error("config error: {0}")]
    Config(#[source] CliError),
    #[error(transparent)]
    Preferences(#[from] PreferenceError),
    #[error("output error: {0}")]
    Output(#[from] CliError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub apartment: Option<Apartment>,
    pub verbose: bool,
}

pub fn run() -> Result<(), CliAppError> {
    let options = parse_options(std::env::args().skip(1).collect())?;
    let config =
        load_selected_config(options.config_path.as_deref()).map_err(CliAppError::Config)?;
    init_logging(&filter_directive(env_directive(), options.verbose, &config));

    let format = options.format.unwrap_or(config.format);
    let apartment = options.apartment.unwrap_or(config.apartment);
    debug!(?format, %apartment, config = ?options.config_path, "resolved settings");

    let platform = system_platform();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_preferred_languages(&platform, apartment, format, &mut out)
}

pub fn print_preferred_languages<P: Platform, W: Write>(
    platform: &P,
    apartment: Apartment,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliAppError> {
    let session = Session::begin(platform, apartment)?;
    let languages = session.preferred_languages()?;
    debug!(
        count = languages.len(),
        skipped = languages.skipped().len(),
        "preferred languages read"
    );
    write_languages(out, &languages, format)?;
    out.flush().map_err(CliError::from)?;
    Ok(())
}

fn parse_options(args: Vec<String>) -> Result<RunOptions, CliAppError> {
    let mut options = RunOptions::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" => {
                let value = next_value("--format", &mut iter)?;
                options.format = Some(value.parse().map_err(usage_error)?);
            }
            "--apartment" => {
                let value = next_value("--apartment", &mut iter)?;
                options.apartment = Some(value.parse().map_err(usage_error)?);
            }
            "--config" => {
                options.config_path = Some(PathBuf::from(next_value("--config", &mut iter)?))
            }
            "--verbose" | "-v" => options.verbose = true,
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(options)
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage_error(message: String) -> CliAppError {
    CliAppError::Usage(format!("{message}\n\n{}", usage()))
}

fn usage() -> String {
    "usage: accept-languages [--format <lines|json>] [--apartment <multi-threaded|single-threaded>] [--config <path>] [--verbose]".to_string()
}
