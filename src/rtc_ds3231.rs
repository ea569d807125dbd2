// RTC driver for the DS3231 temperature-compensated real-time clock.
// Datasheet: https://www.analog.com/media/en/technical-documentation/data-sheets/DS3231.pdf

use embedded_hal::i2c::I2c;

use crate::clock::DateTime;
use crate::time_source::TimeSource;

pub const DEFAULT_I2C_ADDR: u8 = 0x68;

const REG_SECONDS: u8 = 0x00; // sec, min, hour, weekday, date, month, year
const REG_STATUS: u8 = 0x0F;

const STATUS_OSF: u8 = 0x80; // oscillator stopped, time is unreliable
const HOUR_12H: u8 = 0x40;
const HOUR_PM: u8 = 0x20;

pub struct Ds3231<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Ds3231<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Wrap the bus and check the chip answers. Fails when nothing ACKs at 0x68.
    pub fn detect(i2c: I2C) -> Result<Self, E> {
        let mut this = Self {
            i2c,
            address: DEFAULT_I2C_ADDR,
        };
        this.read_reg(REG_STATUS)?;
        Ok(this)
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> I2C {
        self.i2c
    }

    // True when the oscillator stopped since the flag was last cleared (battery died).
    pub fn lost_power(&mut self) -> Result<bool, E> {
        Ok(self.read_reg(REG_STATUS)? & STATUS_OSF != 0)
    }

    pub fn read_datetime(&mut self) -> Result<DateTime, E> {
        let mut buf = [0u8; 7];
        self.i2c
            .write_read(self.address, &[REG_SECONDS], &mut buf)?;

        let hour_raw = buf[2];
        let hour = if hour_raw & HOUR_12H != 0 {
            // 12-hour mode, 12 AM is midnight
            let h = bcd_decode(hour_raw & 0x1F) % 12;
            if hour_raw & HOUR_PM != 0 {
                h + 12
            } else {
                h
            }
        } else {
            bcd_decode(hour_raw & 0x3F)
        };

        Ok(DateTime {
            year: 2000 + bcd_decode(buf[6]) as u16,
            month: bcd_decode(buf[5] & 0x1F), // bit 7 is the century flag
            day: bcd_decode(buf[4] & 0x3F),
            hour,
            minute: bcd_decode(buf[1] & 0x7F),
            second: bcd_decode(buf[0] & 0x7F),
        })
    }

    // Set datetime in 24-hour mode and clear the oscillator-stop flag.
    pub fn adjust(&mut self, dt: &DateTime) -> Result<(), E> {
        // chip counts weekdays 1-7, Sunday stored as 7
        let dow = match dt.weekday() {
            0 => 7,
            d => d,
        };
        let data = [
            REG_SECONDS,
            bcd_encode(dt.second),
            bcd_encode(dt.minute),
            bcd_encode(dt.hour),
            dow,
            bcd_encode(dt.day),
            bcd_encode(dt.month),
            bcd_encode((dt.year % 100) as u8),
        ];
        self.i2c.write(self.address, &data)?;

        let status = self.read_reg(REG_STATUS)?;
        self.write_reg(REG_STATUS, status & !STATUS_OSF)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, E> {
        let mut out = [0u8];
        self.i2c.write_read(self.address, &[reg], &mut out)?;
        Ok(out[0])
    }

    fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), E> {
        self.i2c.write(self.address, &[reg, val])
    }
}

impl<I2C, E> TimeSource for Ds3231<I2C>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn now(&mut self) -> Result<DateTime, E> {
        self.read_datetime()
    }

    fn lost_power(&mut self) -> Result<bool, E> {
        Ds3231::lost_power(self)
    }

    fn adjust(&mut self, dt: &DateTime) -> Result<(), E> {
        Ds3231::adjust(self, dt)
    }
}

// BCD decode
fn bcd_decode(v: u8) -> u8 {
    (v & 0x0F) + ((v >> 4) * 10)
}

// BCD encode
fn bcd_encode(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}
