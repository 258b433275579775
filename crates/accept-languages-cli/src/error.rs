use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode languages as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::CliError;

    #[test]
    fn display_formats_toml() {
        let err = toml::from_str::<toml::Table>("format = ").expect_err("invalid toml");
        let err = CliError::from(err);
        assert!(err.to_string().starts_with("invalid config: "));
    }
}
