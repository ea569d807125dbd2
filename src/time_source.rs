//! Time source contract and the one-time startup seeding.

use core::fmt::Debug;

use embedded_hal::i2c::I2c;
use log::{info, warn};

use crate::clock::DateTime;
use crate::error::InitError;
use crate::rtc_ds3231::Ds3231;

/// A battery-backed calendar clock.
pub trait TimeSource {
    type Error: Debug;

    /// Current calendar time.
    fn now(&mut self) -> Result<DateTime, Self::Error>;

    /// True when the stored time can't be trusted (backup power was lost).
    fn lost_power(&mut self) -> Result<bool, Self::Error>;

    fn adjust(&mut self, dt: &DateTime) -> Result<(), Self::Error>;
}

/// Seed the clock with `fallback` if it reports power loss. Returns whether it was seeded.
pub fn seed_if_power_lost<T: TimeSource>(
    clock: &mut T,
    fallback: &DateTime,
) -> Result<bool, T::Error> {
    if !clock.lost_power()? {
        return Ok(false);
    }
    warn!(
        "RTC lost power, seeding with {} {}",
        fallback.date_text(),
        fallback.time_text()
    );
    clock.adjust(fallback)?;
    Ok(true)
}

/// Find the DS3231 and seed it if needed. Only a missing chip is fatal; a
/// failed seed is logged and the clock is used as-is.
pub fn init_time_source<I2C, E>(i2c: I2C, fallback: &DateTime) -> Result<Ds3231<I2C>, InitError>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    let mut rtc = Ds3231::detect(i2c).map_err(|_| InitError::RtcNotFound)?;
    info!("RTC found");

    if let Err(e) = seed_if_power_lost(&mut rtc, fallback) {
        warn!("RTC seed failed: {:?}", e);
    }
    Ok(rtc)
}
