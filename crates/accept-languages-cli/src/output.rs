use std::io::Write;
use std::str::FromStr;

use accept_languages_core::PreferredLanguages;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

pub fn write_languages<W: Write>(
    out: &mut W,
    languages: &PreferredLanguages,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Lines => {
            for tag in languages.iter() {
                writeln!(out, "{tag}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, languages)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn parses_format_names() {
        assert_eq!("lines".parse::<OutputFormat>(), Ok(OutputFormat::Lines));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
