#![allow(unsafe_code)] // Windows Runtime calls are unsafe

use accept_languages_core::{
    Apartment, LanguageList, Platform, PlatformError, PlatformResult, PreferencesFactory,
};
use tracing::trace;
use windows::System::UserProfile::IGlobalizationPreferencesStatics;
use windows::Win32::System::WinRT::{
    RO_INIT_MULTITHREADED, RO_INIT_SINGLETHREADED, RO_INIT_TYPE, RoGetActivationFactory,
    RoInitialize, RoUninitialize,
};
use windows::core::HSTRING;
use windows_collections::IVectorView;

#[derive(Clone, Copy, Debug, Default)]
pub struct WinRtPlatform;

pub struct GlobalizationPreferencesFactory(IGlobalizationPreferencesStatics);

pub struct LanguageView(IVectorView<HSTRING>);

impl Platform for WinRtPlatform {
    type Factory = GlobalizationPreferencesFactory;

    fn initialize(&self, apartment: Apartment) -> PlatformResult<()> {
        unsafe { RoInitialize(init_type(apartment)) }.map_err(platform_error)
    }

    fn uninitialize(&self) {
        unsafe { RoUninitialize() }
    }

    fn activation_factory(&self, class_name: &'static str) -> PlatformResult<Self::Factory> {
        // HSTRING releases the class name on every path.
        let class = HSTRING::from(class_name);
        let statics =
            unsafe { RoGetActivationFactory::<IGlobalizationPreferencesStatics>(&class) }
                .map_err(platform_error)?;
        Ok(GlobalizationPreferencesFactory(statics))
    }
}

impl PreferencesFactory for GlobalizationPreferencesFactory {
    type Languages = LanguageView;

    fn languages(&self) -> PlatformResult<LanguageView> {
        self.0.Languages().map(LanguageView).map_err(platform_error)
    }
}

impl LanguageList for LanguageView {
    fn size(&self) -> PlatformResult<u32> {
        self.0.Size().map_err(platform_error)
    }

    fn get_at(&self, index: u32) -> PlatformResult<String> {
        let value = self.0.GetAt(index).map_err(platform_error)?;
        trace!(index, len = value.len(), "read language entry");
        Ok(value.to_string_lossy())
    }
}

fn init_type(apartment: Apartment) -> RO_INIT_TYPE {
    match apartment {
        Apartment::MultiThreaded => RO_INIT_MULTITHREADED,
        Apartment::SingleThreaded => RO_INIT_SINGLETHREADED,
    }
}

fn platform_error(err: windows::core::Error) -> PlatformError {
    PlatformError::new(err.code().0, err.message())
}
