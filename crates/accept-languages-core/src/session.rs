use tracing::debug;

use crate::reader::{PreferredLanguages, read_preferred_languages};
use crate::{Apartment, Platform, PreferenceError, PreferenceResult};

pub struct Session<'p, P: Platform> {
    platform: &'p P,
    apartment: Apartment,
}

impl<'p, P: Platform> Session<'p, P> {
    pub fn begin(platform: &'p P, apartment: Apartment) -> PreferenceResult<Self> {
        platform
            .initialize(apartment)
            .map_err(PreferenceError::SessionInit)?;
        debug!(%apartment, "runtime session started");
        Ok(Self {
            platform,
            apartment,
        })
    }

    pub fn platform(&self) -> &'p P {
        self.platform
    }

    pub fn apartment(&self) -> Apartment {
        self.apartment
    }

    pub fn preferred_languages(&self) -> PreferenceResult<PreferredLanguages> {
        read_preferred_languages(self)
    }
}

impl<P: Platform> Drop for Session<'_, P> {
    fn drop(&mut self) {
        self.platform.uninitialize();
        debug!("runtime session ended");
    }
}
