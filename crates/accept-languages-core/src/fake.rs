use std::cell::Cell;

use crate::{Apartment, LanguageList, Platform, PlatformError, PlatformResult, PreferencesFactory};

pub(crate) struct FakePlatform {
    pub init_error: Option<PlatformError>,
    pub activation_error: Option<PlatformError>,
    pub query_error: Option<PlatformError>,
    pub size_error: Option<PlatformError>,
    pub entries: Vec<PlatformResult<String>>,
    pub apartment: Cell<Option<Apartment>>,
    pub initialized: Cell<u32>,
    pub uninitialized: Cell<u32>,
    pub activations: Cell<u32>,
}

impl FakePlatform {
    pub fn with_languages(languages: &[&str]) -> Self {
        Self {
            init_error: None,
            activation_error: None,
            query_error: None,
            size_error: None,
            entries: languages.iter().map(|tag| Ok(tag.to_string())).collect(),
            apartment: Cell::new(None),
            initialized: Cell::new(0),
            uninitialized: Cell::new(0),
            activations: Cell::new(0),
        }
    }
}

pub(crate) struct FakeFactory {
    query_error: Option<PlatformError>,
    size_error: Option<PlatformError>,
    entries: Vec<PlatformResult<String>>,
}

pub(crate) struct FakeList {
    size_error: Option<PlatformError>,
    entries: Vec<PlatformResult<String>>,
}

impl Platform for FakePlatform {
    type Factory = FakeFactory;

    fn initialize(&self, apartment: Apartment) -> PlatformResult<()> {
        if let Some(err) = &self.init_error {
            return Err(err.clone());
        }
        self.apartment.set(Some(apartment));
        self.initialized.set(self.initialized.get() + 1);
        Ok(())
    }

    fn uninitialize(&self) {
        self.uninitialized.set(self.uninitialized.get() + 1);
    }

    fn activation_factory(&self, _class_name: &'static str) -> PlatformResult<FakeFactory> {
        self.activations.set(self.activations.get() + 1);
        if let Some(err) = &self.activation_error {
            return Err(err.clone());
        }
        Ok(FakeFactory {
            query_error: self.query_error.clone(),
            size_error: self.size_error.clone(),
            entries: self.entries.clone(),
        })
    }
}

impl PreferencesFactory for FakeFactory {
    type Languages = FakeList;

    fn languages(&self) -> PlatformResult<FakeList> {
        if let Some(err) = &self.query_error {
            return Err(err.clone());
        }
        Ok(FakeList {
            size_error: self.size_error.clone(),
            entries: self.entries.clone(),
        })
    }
}

impl LanguageList for FakeList {
    fn size(&self) -> PlatformResult<u32> {
        if let Some(err) = &self.size_error {
            return Err(err.clone());
        }
        Ok(self.entries.len() as u32)
    }

    fn get_at(&self, index: u32) -> PlatformResult<String> {
        self.entries
            .get(index as usize)
            .cloned()
            .unwrap_or_else(|| Err(PlatformError::new(-1, "index out of range")))
    }
}
