use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    code: Option<i32>,
    message: String,
}

pub type PlatformResult<T> = Result<T, PlatformError>;

impl PlatformError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (0x{:08X})", self.message, code as u32),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for PlatformError {}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("runtime session initialization failed: {0}")]
    SessionInit(#[source] PlatformError),
    #[error("activation factory lookup failed for {class}: {source}")]
    Activation {
        class: &'static str,
        #[source]
        source: PlatformError,
    },
    #[error("reading {property} failed: {source}")]
    Query {
        property: &'static str,
        #[source]
        source: PlatformError,
    },
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;
