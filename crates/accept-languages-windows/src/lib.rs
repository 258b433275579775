#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod winrt;

#[cfg(not(windows))]
pub use crate::unsupported::{NoFactory, NoLanguages, UnsupportedPlatform};
#[cfg(windows)]
pub use crate::winrt::{GlobalizationPreferencesFactory, LanguageView, WinRtPlatform};

#[cfg(windows)]
pub type SystemPlatform = WinRtPlatform;
#[cfg(not(windows))]
pub type SystemPlatform = UnsupportedPlatform;

pub fn system_platform() -> SystemPlatform {
    SystemPlatform::default()
}
