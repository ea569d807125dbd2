//! Board pin mapping. The RTC and the OLED share one I2C bus.
//!
//! - ESP32-S3: SDA => GPIO8, SCL => GPIO9
//! - ESP32-C6: SDA => GPIO6, SCL => GPIO7
//! - both modules on 3.3V and GND, with the breakout pull-ups on SDA/SCL

use esp_hal::{
    i2c::master::{Config as I2cConfig, ConfigError, I2c},
    peripherals::Peripherals,
    time::Rate,
    Blocking,
};

use crate::config::I2C_FREQ_KHZ;

/// Take the I2C controller and its pins out of `p`.
pub fn init_i2c_bus(p: Peripherals) -> Result<I2c<'static, Blocking>, ConfigError> {
    let cfg = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQ_KHZ));
    let i2c = I2c::new(p.I2C0, cfg)?;

    cfg_if::cfg_if! {
        if #[cfg(feature = "esp32s3")] {
            Ok(i2c.with_sda(p.GPIO8).with_scl(p.GPIO9))
        } else {
            Ok(i2c.with_sda(p.GPIO6).with_scl(p.GPIO7))
        }
    }
}
