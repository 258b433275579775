use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::PlatformResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Apartment {
    #[default]
    MultiThreaded,
    SingleThreaded,
}

impl Apartment {
    pub fn as_str(self) -> &'static str {
        match self {
            Apartment::MultiThreaded => "multi-threaded",
            Apartment::SingleThreaded => "single-threaded",
        }
    }
}

impl fmt::Display for Apartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Apartment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "multi-threaded" => Ok(Apartment::MultiThreaded),
            "single-threaded" => Ok(Apartment::SingleThreaded),
            other => Err(format!("unknown apartment: {other}")),
        }
    }
}

/// `initialize` and `uninitialize` are only called through [`crate::Session`], which pairs
/// every successful `initialize` with exactly one `uninitialize`.
pub trait Platform {
    type Factory: PreferencesFactory;

    fn initialize(&self, apartment: Apartment) -> PlatformResult<()>;

    fn uninitialize(&self);

    fn activation_factory(&self, class_name: &'static str) -> PlatformResult<Self::Factory>;
}

pub trait PreferencesFactory {
    type Languages: LanguageList;

    fn languages(&self) -> PlatformResult<Self::Languages>;
}

pub trait LanguageList {
    fn size(&self) -> PlatformResult<u32>;

    fn get_at(&self, index: u32) -> PlatformResult<String>;
}
