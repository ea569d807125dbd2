//! Calendar time value and the helpers shared by the RTC driver and the renderer.
//!
//! - `DateTime` is the immutable timestamp read from the clock chip
//! - Seconds-since-1970 to calendar conversion (valid 2000-2099, which is all
//!   the DS3231 can hold) and the firmware build time
//! - Total weekday / month name lookups
//! - Fixed-size text formatting for the clock faces

use core::fmt::Write;

use heapless::String;

// Day names, index 0 = Sunday
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// Month abbreviations, index 0 = January
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Capacity of the formatted strings. "Sep 30, 65535" is the longest date.
pub const TEXT_CAP: usize = 16;

pub type ClockText = String<TEXT_CAP>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,  // full year, e.g., 2024
    pub month: u8,  // 1-12
    pub day: u8,    // 1-31
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
    pub second: u8, // 0-59
}

impl DateTime {
    /// 2000-01-01 00:00:00, the DS3231 reset value.
    pub const Y2K: DateTime = DateTime {
        year: 2000,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // 1970-01-01 was a Thursday
        ((days_since_unix(self.year, self.month, self.day) + 4) % 7) as u8
    }

    // Basic sanity check on decoded RTC time.
    pub fn is_valid(&self) -> bool {
        (2000..=2099).contains(&self.year)
            && (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// "HH:MM:SS", zero padded, 24-hour.
    pub fn time_text(&self) -> ClockText {
        let mut s = ClockText::new();
        let _ = write!(s, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        s
    }

    /// "Mon D, YYYY", day without padding.
    pub fn date_text(&self) -> ClockText {
        let mut s = ClockText::new();
        let _ = write!(s, "{} {}, {}", month_abbrev(self.month), self.day, self.year);
        s
    }
}

/// Weekday name for 0..=6; anything larger wraps.
pub fn weekday_name(index: u8) -> &'static str {
    WEEKDAYS[(index % 7) as usize]
}

/// Month abbreviation for 1..=12; 0 maps to January, larger values wrap.
pub fn month_abbrev(month: u8) -> &'static str {
    MONTHS[(month.saturating_sub(1) % 12) as usize]
}

// Days since 1970-01-01 for UTC conversion (simple, handles leap years through 2099).
pub fn days_since_unix(year: u16, month: u8, day: u8) -> u32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;
    let (y1, m1) = if m <= 2 { (y - 1, m + 12) } else { (y, m) };
    let era = y1 / 400;
    let yoe = y1 - era * 400; // year of era
    let doy = 153 * (m1 + 1) / 5 + d - 123; // days since March 1
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // days since era
    (era * 146097 + doe - 719468) as u32 // 719468 = days from 0000-03-01 to 1970-01-01
}

// Convert Unix timestamp (seconds since 1970-01-01) to DateTime.
pub fn unix_to_datetime(mut ts: u32) -> DateTime {
    let days = ts / 86400;
    ts %= 86400;
    let hour = (ts / 3600) as u8;
    ts %= 3600;
    let minute = (ts / 60) as u8;
    let second = (ts % 60) as u8;

    // Civil-from-days, shifted so the era starts on March 1st
    let z = days as i32 + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };

    DateTime {
        year: year as u16,
        month: month as u8,
        day: day as u8,
        hour,
        minute,
        second,
    }
}

/// Local build time of this firmware image, used to seed a clock that lost power.
pub fn build_datetime() -> DateTime {
    parse_build_datetime(option_env!("FIRMWARE_BUILD_LOCAL"))
}

/// Seconds-since-1970 text (local wall clock) to a `DateTime`. Missing,
/// malformed or out-of-range values (outside what the RTC can store) give
/// `DateTime::Y2K`.
pub fn parse_build_datetime(raw: Option<&str>) -> DateTime {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(unix_to_datetime)
        .filter(DateTime::is_valid)
        .unwrap_or(DateTime::Y2K)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime_to_unix(dt: &DateTime) -> u32 {
        days_since_unix(dt.year, dt.month, dt.day) * 86_400
            + dt.hour as u32 * 3600
            + dt.minute as u32 * 60
            + dt.second as u32
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(DateTime::new(1970, 1, 1, 0, 0, 0).weekday(), 4);
        assert_eq!(DateTime::new(2000, 1, 1, 0, 0, 0).weekday(), 6);
        assert_eq!(DateTime::new(2024, 2, 29, 0, 0, 0).weekday(), 4);
        assert_eq!(DateTime::new(2024, 3, 3, 14, 5, 9).weekday(), 0);
    }

    #[test]
    fn name_lookups_are_total() {
        for i in 0..=u8::MAX {
            assert!(!weekday_name(i).is_empty());
            assert!(!month_abbrev(i).is_empty());
        }
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(6), "Saturday");
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
    }

    #[test]
    fn formats_scenario_time() {
        let dt = DateTime::new(2024, 3, 3, 14, 5, 9);
        assert_eq!(dt.time_text().as_str(), "14:05:09");
        assert_eq!(dt.date_text().as_str(), "Mar 3, 2024");
        assert_eq!(weekday_name(dt.weekday()), "Sunday");
    }

    #[test]
    fn formats_midnight_and_widest_date() {
        let dt = DateTime::new(2099, 9, 30, 0, 0, 0);
        assert_eq!(dt.time_text().as_str(), "00:00:00");
        assert_eq!(dt.date_text().as_str(), "Sep 30, 2099");
    }

    #[test]
    fn unix_conversion_matches_known_instant() {
        let dt = DateTime::new(2024, 3, 3, 14, 5, 9);
        assert_eq!(datetime_to_unix(&dt), 1_709_474_709);
        assert_eq!(unix_to_datetime(1_709_474_709), dt);
        assert_eq!(unix_to_datetime(datetime_to_unix(&DateTime::Y2K)), DateTime::Y2K);
    }

    #[test]
    fn validity_rejects_out_of_range_fields() {
        assert!(DateTime::new(2024, 3, 3, 23, 59, 59).is_valid());
        assert!(!DateTime::new(2024, 13, 3, 0, 0, 0).is_valid());
        assert!(!DateTime::new(2024, 3, 0, 0, 0, 0).is_valid());
        assert!(!DateTime::new(2024, 3, 3, 24, 0, 0).is_valid());
        assert!(!DateTime::new(1999, 3, 3, 0, 0, 0).is_valid());
    }

    #[test]
    fn build_time_text_is_local_wall_clock() {
        // 2026-10-16 11:36:50 on the build machine's clock
        let expected = DateTime::new(2026, 10, 16, 11, 36, 50);
        let raw = datetime_to_unix(&expected);
        assert_eq!(raw, 1_792_150_610);
        assert_eq!(parse_build_datetime(Some("1792150610")), expected);
        assert_eq!(parse_build_datetime(Some(" 1792150610\n")), expected);
    }

    #[test]
    fn bad_build_time_falls_back_to_y2k() {
        assert_eq!(parse_build_datetime(None), DateTime::Y2K);
        assert_eq!(parse_build_datetime(Some("")), DateTime::Y2K);
        assert_eq!(parse_build_datetime(Some("-5")), DateTime::Y2K);
        assert_eq!(parse_build_datetime(Some("abc")), DateTime::Y2K);
        // 1999-12-31 23:59:59, before the RTC range
        assert_eq!(parse_build_datetime(Some("946684799")), DateTime::Y2K);
    }

    #[test]
    fn build_datetime_is_always_valid() {
        assert!(build_datetime().is_valid());
    }
}
