use accept_languages_core::{
    Apartment, LanguageList, Platform, PlatformError, PlatformResult, PreferencesFactory,
};

const UNSUPPORTED: &str = "the Windows Runtime is not available on this platform";

#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedPlatform;

pub enum NoFactory {}

pub enum NoLanguages {}

impl Platform for UnsupportedPlatform {
    type Factory = NoFactory;

    fn initialize(&self, _apartment: Apartment) -> PlatformResult<()> {
        Err(PlatformError::unsupported(UNSUPPORTED))
    }

    fn uninitialize(&self) {}

    fn activation_factory(&self, _class_name: &'static str) -> PlatformResult<NoFactory> {
        Err(PlatformError::unsupported(UNSUPPORTED))
    }
}

impl PreferencesFactory for NoFactory {
    type Languages = NoLanguages;

    fn languages(&self) -> PlatformResult<NoLanguages> {
        match *self {}
    }
}

impl LanguageList for NoLanguages {
    fn size(&self) -> PlatformResult<u32> {
        match *self {}
    }

    fn get_at(&self, _index: u32) -> PlatformResult<String> {
        match *self {}
    }
}
