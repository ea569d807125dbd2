//! Display mode state and the timer that alternates between the two faces.

use crate::clock::DateTime;
use crate::display::Surface;
use crate::ui::{draw_analog, draw_digital};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Digital,
    Analog,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Digital => DisplayMode::Analog,
            DisplayMode::Analog => DisplayMode::Digital,
        }
    }
}

/// Current face plus the instant it was last switched.
///
/// Times are `u32` milliseconds from a free-running counter. Elapsed time uses
/// wrapping subtraction, so the ~49 day rollover is harmless.
#[derive(Copy, Clone, Debug)]
pub struct ModeScheduler {
    mode: DisplayMode,
    last_switch_ms: u32,
    interval_ms: u32,
}

impl ModeScheduler {
    /// Starts on the digital face with `start_ms` as the baseline.
    pub fn new(start_ms: u32, interval_ms: u32) -> Self {
        Self {
            mode: DisplayMode::Digital,
            last_switch_ms: start_ms,
            interval_ms,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_switch_ms)
    }

    /// Flip the mode once the interval is exceeded. Returns the new mode on a
    /// flip. The baseline only moves on a flip, never per frame.
    pub fn poll(&mut self, now_ms: u32) -> Option<DisplayMode> {
        if self.elapsed(now_ms) <= self.interval_ms {
            return None;
        }
        self.last_switch_ms = now_ms;
        self.mode = self.mode.toggled();
        log::debug!("display mode -> {:?}", self.mode);
        Some(self.mode)
    }
}

/// Draw the face for `mode` and present it.
pub fn render_frame<S: Surface>(
    s: &mut S,
    mode: DisplayMode,
    now: &DateTime,
) -> Result<(), S::PresentError> {
    match mode {
        DisplayMode::Digital => draw_digital(s, now),
        DisplayMode::Analog => draw_analog(s, now),
    }
    s.present()
}
