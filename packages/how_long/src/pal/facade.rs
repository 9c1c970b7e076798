//! Dispatch between the real and fake platform implementations.

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{Platform, RealPlatform};

/// Enum facade over the available platform implementations.
///
/// Measurement types hold one of these and call through the [`Platform`]
/// trait, so the choice between real and fake readings is made once, at
/// construction time, instead of being re-detected in every method.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }
}

impl Platform for PlatformFacade {
    fn monotonic_nanos(&self) -> u128 {
        match self {
            Self::Real(platform) => platform.monotonic_nanos(),
            #[cfg(test)]
            Self::Fake(platform) => platform.monotonic_nanos(),
        }
    }

    fn memory_usage(&self) -> u64 {
        match self {
            Self::Real(platform) => platform.memory_usage(),
            #[cfg(test)]
            Self::Fake(platform) => platform.memory_usage(),
        }
    }
}

impl From<RealPlatform> for PlatformFacade {
    fn from(platform: RealPlatform) -> Self {
        Self::Real(platform)
    }
}

#[cfg(test)]
impl From<FakePlatform> for PlatformFacade {
    fn from(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}
