//! Platform abstraction layer for monotonic time and memory usage readings.
//!
//! This module provides a platform abstraction that allows switching between
//! real readings (monotonic clock, process memory counters) and fake
//! implementations that tests control deterministically.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
pub(crate) use real::RealPlatform;
