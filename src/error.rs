//! Startup failures. Each one halts the firmware after printing its message.

use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// I2C peripheral could not be configured.
    Bus,
    /// Nothing answered at the DS3231 address.
    RtcNotFound,
    /// The SSD1306 did not accept its init sequence.
    DisplayNotFound,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Bus => f.write_str("I2C bus configuration failed"),
            InitError::RtcNotFound => f.write_str("Couldn't find RTC"),
            InitError::DisplayNotFound => f.write_str("SSD1306 allocation failed"),
        }
    }
}

impl core::error::Error for InitError {}
