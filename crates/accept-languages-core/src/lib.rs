#![forbid(unsafe_code)]

mod error;
mod platform;
mod reader;
mod session;

pub use crate::error::{PlatformError, PlatformResult, PreferenceError, PreferenceResult};
pub use crate::platform::{Apartment, LanguageList, Platform, PreferencesFactory};
pub use crate::reader::{
    GLOBALIZATION_PREFERENCES_CLASS, LANGUAGES_PROPERTY, PreferredLanguages,
    read_preferred_languages,
};
pub use crate::session::Session;

#[cfg(test)]
mod fake;
