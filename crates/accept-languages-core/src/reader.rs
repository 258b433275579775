use serde::Serialize;
use tracing::{debug, warn};

use crate::{LanguageList, Platform, PreferenceError, PreferenceResult, PreferencesFactory, Session};

pub const GLOBALIZATION_PREFERENCES_CLASS: &str =
    "Windows.System.UserProfile.GlobalizationPreferences";
pub const LANGUAGES_PROPERTY: &str = "Languages";
const SIZE_PROPERTY: &str = "Size";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PreferredLanguages {
    languages: Vec<String>,
    skipped: Vec<u32>,
}

impl PreferredLanguages {
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn skipped(&self) -> &[u32] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }
}

pub fn read_preferred_languages<P: Platform>(
    session: &Session<'_, P>,
) -> PreferenceResult<PreferredLanguages> {
    let factory = session
        .platform()
        .activation_factory(GLOBALIZATION_PREFERENCES_CLASS)
        .map_err(|source| PreferenceError::Activation {
            class: GLOBALIZATION_PREFERENCES_CLASS,
            source,
        })?;
    debug!(class = GLOBALIZATION_PREFERENCES_CLASS, "activation factory resolved");

    let list = factory
        .languages()
        .map_err(|source| PreferenceError::Query {
            property: LANGUAGES_PROPERTY,
            source,
        })?;
    let size = list.size().map_err(|source| PreferenceError::Query {
        property: SIZE_PROPERTY,
        source,
    })?;
    debug!(size, "preferred language list read");

    let mut result = PreferredLanguages {
        languages: Vec::with_capacity(size as usize),
        skipped: Vec::new(),
    };
    for index in 0..size {
        match list.get_at(index) {
            Ok(language) => result.languages.push(language),
            Err(err) => {
                warn!(index, error = %err, "skipping unreadable language entry");
                result.skipped.push(index);
            }
        }
    }

    Ok(result)
}
